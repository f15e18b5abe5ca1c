use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::ItemStore;

pub fn play<S: ItemStore>(store: &S, id: ItemId) -> Result<CmdResult> {
    let audiobook = store.get_item(id)?.as_audiobook()?;
    tracing::debug!(item = %id, "playing audiobook");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(audiobook.play()));
    Ok(result)
}

pub fn archive<S: ItemStore>(store: &S, id: ItemId) -> Result<CmdResult> {
    let magazine = store.get_item(id)?.as_emagazine()?;
    tracing::debug!(item = %id, "archiving magazine issue");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(magazine.archive_issue()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraError;
    use crate::model::ItemKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn play_audiobook() {
        let fx = StoreFixture::seeded();
        let result = play(&fx.store, ItemId(2)).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Playing audiobook: Learn DSA (120.0 mins)"
        );
    }

    #[test]
    fn play_rejects_other_kinds() {
        let fx = StoreFixture::seeded();
        for id in [1, 3] {
            let err = play(&fx.store, ItemId(id)).unwrap_err();
            assert!(matches!(
                err,
                LibraError::WrongVariant {
                    expected: ItemKind::AudioBook,
                    ..
                }
            ));
        }
    }

    #[test]
    fn archive_magazine() {
        let fx = StoreFixture::seeded();
        let result = archive(&fx.store, ItemId(3)).unwrap();
        assert_eq!(result.messages[0].content, "Archiving issue 45 of Tech Today");
    }

    #[test]
    fn archive_rejects_other_kinds() {
        let fx = StoreFixture::seeded();
        for id in [1, 2] {
            assert!(matches!(
                archive(&fx.store, ItemId(id)),
                Err(LibraError::WrongVariant {
                    expected: ItemKind::EMagazine,
                    ..
                })
            ));
        }
    }

    #[test]
    fn actions_on_unknown_ids_are_not_found() {
        let fx = StoreFixture::seeded();
        assert!(matches!(play(&fx.store, ItemId(9)), Err(LibraError::NotFound(_))));
        assert!(matches!(archive(&fx.store, ItemId(9)), Err(LibraError::NotFound(_))));
    }

    #[test]
    fn actions_leave_loan_state_alone() {
        let mut fx = StoreFixture::seeded();
        crate::commands::lending::borrow(&mut fx.store, ItemId(2)).unwrap();
        play(&fx.store, ItemId(2)).unwrap();
        archive(&fx.store, ItemId(3)).unwrap();

        assert!(!fx.store.get_item(ItemId(2)).unwrap().is_available());
        assert!(fx.store.get_item(ItemId(3)).unwrap().is_available());
    }
}
