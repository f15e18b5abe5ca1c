//! Borrow and return: the only operations that change item or ledger state.

use crate::commands::{CmdMessage, CmdResult, ReturnReceipt};
use crate::error::Result;
use crate::model::{ItemId, ReturnOutcome};
use crate::store::ledger::FineLedger;
use crate::store::ItemStore;

pub fn borrow<S: ItemStore>(store: &mut S, id: ItemId) -> Result<CmdResult> {
    let item = store.get_item_mut(id)?;
    item.borrow()?;
    tracing::info!(item = %id, title = item.title(), "item borrowed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} borrowed successfully!",
        item.title()
    )));
    Ok(result)
}

/// Closes the loan on `id` and records its fine in `ledger`.
///
/// The fine is added even when it is zero (including the not-borrowed case), so
/// every item that has been through a return has a ledger entry.
pub fn return_item<S: ItemStore>(
    store: &mut S,
    ledger: &mut FineLedger,
    id: ItemId,
    actual_days: i64,
) -> Result<CmdResult> {
    let item = store.get_item_mut(id)?;
    let outcome = item.return_item(actual_days);
    let fine_on_record = ledger.add(id, outcome.fine());

    match outcome {
        ReturnOutcome::Returned { fine } => {
            tracing::info!(item = %id, actual_days, fine, fine_on_record, "item returned");
        }
        ReturnOutcome::NotBorrowed => {
            tracing::debug!(item = %id, "return requested for item that is not on loan");
        }
    }

    Ok(CmdResult::default().with_receipt(ReturnReceipt {
        title: item.title().to_string(),
        outcome,
        fine_on_record,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraError;
    use crate::model::LibraryItem;
    use crate::store::memory::fixtures::StoreFixture;

    fn is_available<S: ItemStore>(store: &S, id: u32) -> bool {
        store.get_item(ItemId(id)).unwrap().is_available()
    }

    #[test]
    fn borrow_marks_item_unavailable() {
        let mut fx = StoreFixture::seeded();
        let result = borrow(&mut fx.store, ItemId(1)).unwrap();

        assert!(!is_available(&fx.store, 1));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Java Basics borrowed successfully!");
    }

    #[test]
    fn borrow_twice_is_already_borrowed() {
        let mut fx = StoreFixture::seeded();
        borrow(&mut fx.store, ItemId(2)).unwrap();

        let err = borrow(&mut fx.store, ItemId(2)).unwrap_err();
        assert!(matches!(err, LibraError::AlreadyBorrowed { .. }));
        assert_eq!(err.to_string(), "Item already borrowed: Learn DSA");
        assert!(!is_available(&fx.store, 2));
    }

    #[test]
    fn borrow_unknown_id_changes_nothing() {
        let mut fx = StoreFixture::seeded();
        let err = borrow(&mut fx.store, ItemId(99)).unwrap_err();

        assert!(matches!(err, LibraError::NotFound(ItemId(99))));
        assert!((1..=3).all(|id| is_available(&fx.store, id)));
        assert!(fx.ledger.is_empty());
    }

    #[test]
    fn return_records_fine() {
        let mut fx = StoreFixture::seeded();
        borrow(&mut fx.store, ItemId(2)).unwrap();

        let result = return_item(&mut fx.store, &mut fx.ledger, ItemId(2), 16).unwrap();
        let receipt = result.receipt.unwrap();
        assert_eq!(receipt.outcome, ReturnOutcome::Returned { fine: 20.0 });
        assert_eq!(receipt.fine_on_record, 20.0);
        assert_eq!(fx.ledger.fine_for(ItemId(2)), 20.0);
        assert!(is_available(&fx.store, 2));
    }

    #[test]
    fn return_within_grace_period_is_free() {
        let mut fx = StoreFixture::seeded();
        borrow(&mut fx.store, ItemId(1)).unwrap();

        let result = return_item(&mut fx.store, &mut fx.ledger, ItemId(1), 14).unwrap();
        assert_eq!(
            result.receipt.unwrap().outcome,
            ReturnOutcome::Returned { fine: 0.0 }
        );
        assert_eq!(fx.ledger.fine_for(ItemId(1)), 0.0);
    }

    #[test]
    fn fines_accumulate_across_loans() {
        let mut fx = StoreFixture::seeded();

        borrow(&mut fx.store, ItemId(3)).unwrap();
        return_item(&mut fx.store, &mut fx.ledger, ItemId(3), 15).unwrap();
        borrow(&mut fx.store, ItemId(3)).unwrap();
        let result = return_item(&mut fx.store, &mut fx.ledger, ItemId(3), 16).unwrap();

        assert_eq!(result.receipt.unwrap().fine_on_record, 30.0);
        assert_eq!(fx.ledger.fine_for(ItemId(3)), 30.0);
    }

    #[test]
    fn return_without_loan_is_not_an_error() {
        let mut fx = StoreFixture::seeded().with_fine(1, 10.0);

        let result = return_item(&mut fx.store, &mut fx.ledger, ItemId(1), 40).unwrap();
        let receipt = result.receipt.unwrap();
        assert_eq!(receipt.outcome, ReturnOutcome::NotBorrowed);
        assert_eq!(receipt.fine_on_record, 10.0);
        assert!(is_available(&fx.store, 1));
    }

    #[test]
    fn return_unknown_id_is_not_found() {
        let mut fx = StoreFixture::new().with_borrowed_item(LibraryItem::book(1, "A", "x", 1));

        let err = return_item(&mut fx.store, &mut fx.ledger, ItemId(5), 20).unwrap_err();
        assert!(matches!(err, LibraError::NotFound(ItemId(5))));
        assert!(fx.ledger.is_empty());
        assert!(!is_available(&fx.store, 1));
    }
}
