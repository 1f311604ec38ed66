use hub_core::catalog::{ChecklistItem, checklist};
use hub_core::enums::Lens;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChecklistArgs;
use crate::commands::shared::parse::parse_lens;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LensChecklistResponse {
    lens: Lens,
    label: &'static str,
    items: &'static [ChecklistItem],
}

/// Handle `crh checklist`.
pub fn handle(args: &ChecklistArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lens = parse_lens(&args.lens)?;
    output(&response(lens), flags.format)
}

const fn response(lens: Lens) -> LensChecklistResponse {
    LensChecklistResponse {
        lens,
        label: lens.label(),
        items: checklist(lens),
    }
}
