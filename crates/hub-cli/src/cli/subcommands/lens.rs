use clap::Subcommand;

/// Lens review commands. `lens` accepts legal, brand, ux or the full name.
#[derive(Clone, Debug, Subcommand)]
pub enum LensCommands {
    /// Set a lens status (not_started, in_review, changes_requested, approved).
    Status {
        asset_id: String,
        lens: String,
        status: String,
    },
    /// Answer a checklist item. Marks it passed unless --fail is given.
    Check {
        asset_id: String,
        lens: String,
        item_id: String,
        #[arg(long)]
        fail: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Replace a lens's overall notes. Blank text clears them.
    Notes {
        asset_id: String,
        lens: String,
        notes: String,
    },
}
