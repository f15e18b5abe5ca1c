use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ledger::FineLedger;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S, ledger: &FineLedger) -> Result<CmdResult> {
    let items = store
        .list_items()
        .into_iter()
        .map(|item| item.show_details(ledger))
        .collect();

    Ok(CmdResult::default()
        .with_listed_items(items)
        .with_total_fines(ledger.total()))
}
