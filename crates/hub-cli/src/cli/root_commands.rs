use clap::{Args, Subcommand};

use crate::cli::subcommands::{AssetCommands, CommentCommands, LensCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Assets under review.
    Asset {
        #[command(subcommand)]
        action: AssetCommands,
    },
    /// Per-lens review actions.
    Lens {
        #[command(subcommand)]
        action: LensCommands,
    },
    /// Asset comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Print the checklist for a lens.
    Checklist(ChecklistArgs),
    /// Query the audit trail.
    Audit(AuditArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ChecklistArgs {
    /// Lens: legal, brand, ux (or the full snake_case name)
    pub lens: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Only entries for this asset
    #[arg(long)]
    pub asset: Option<String>,
    /// Only entries with this action (created, seeded, lens_updated, status_changed, commented)
    #[arg(long)]
    pub action: Option<String>,
}
