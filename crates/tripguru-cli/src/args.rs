use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Command-line interface for the TripGuru trip tracker
///
/// Record trips with a destination, a date range, a participant count and
/// notes, then list, inspect, edit or delete them. Dates are entered and
/// shown as dd.mm.yyyy in the local time zone.
#[derive(Parser)]
#[command(version, about, name = "tripguru")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tripguru/tripguru.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print trips as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, trips are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// List all trips, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a trip
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Record a new trip
    #[command(alias = "a")]
    Add(AddTripArgs),
    /// Change a recorded trip
    #[command(alias = "e")]
    Edit(EditTripArgs),
    /// Delete a trip permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTripArgs),
}

/// Optional trip fields shared by `add` and `edit`.
///
/// Values are passed to the trip form as typed; the form validates them.
#[derive(ClapArgs, Debug, Default)]
pub struct TripFieldArgs {
    /// Where the trip goes
    #[arg(short, long)]
    pub destination: Option<String>,

    /// First day of the trip (dd.mm.yyyy or ddmmyyyy)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Last day of the trip (dd.mm.yyyy or ddmmyyyy)
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Number of people travelling
    #[arg(short, long, value_name = "N")]
    pub people: Option<String>,

    /// Free-form notes about the trip
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(ClapArgs)]
pub struct ShowTripArgs {
    #[arg(help = "Unique identifier of the trip to show")]
    pub id: u64,
}

#[derive(ClapArgs)]
pub struct AddTripArgs {
    /// Name of the trip
    #[arg(short, long)]
    pub name: String,

    #[command(flatten)]
    pub fields: TripFieldArgs,
}

#[derive(ClapArgs)]
pub struct EditTripArgs {
    #[arg(help = "Unique identifier of the trip to edit")]
    pub id: u64,

    /// New name for the trip
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub fields: TripFieldArgs,

    /// Remove the start date
    #[arg(long, conflicts_with = "start")]
    pub clear_start: bool,

    /// Remove the end date
    #[arg(long, conflicts_with = "end")]
    pub clear_end: bool,
}

#[derive(ClapArgs)]
pub struct DeleteTripArgs {
    #[arg(help = "Unique identifier of the trip to permanently delete")]
    pub id: u64,

    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_list() {
        let args = Args::try_parse_from(["tripguru", "--no-color"]).unwrap();
        assert!(args.no_color);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_edit_rejects_setting_and_clearing_start() {
        let result = Args::try_parse_from([
            "tripguru",
            "edit",
            "1",
            "--start",
            "01.05.2024",
            "--clear-start",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_parses_fields() {
        let args = Args::try_parse_from([
            "tripguru", "add", "--name", "Rome", "-d", "Italy", "--people", "3",
        ])
        .unwrap();
        let Some(Commands::Add(add)) = args.command else {
            panic!("expected add");
        };
        assert_eq!(add.name, "Rome");
        assert_eq!(add.fields.destination.as_deref(), Some("Italy"));
        assert_eq!(add.fields.people.as_deref(), Some("3"));
    }
}
