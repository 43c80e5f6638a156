use std::path::PathBuf;

use clap::Parser;

use crate::core::constants::{
    DEFAULT_APPEARANCES_CSV, DEFAULT_CHARACTER_TILES_PLOT, DEFAULT_DPI, DEFAULT_VOLUME_COUNTS_PLOT,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "appearance-graph",
    about = "Reshape a characters-by-volume table and chart who appears where"
)]
pub struct Cli {
    /// Wide CSV: a `Name` column plus one column per volume
    #[arg(value_name = "CHARACTERS_BY_VOLUME_CSV")]
    pub characters_by_volume_csv: PathBuf,

    /// Where to write the long-format table
    #[arg(
        long = "output_character_appearances_csv",
        alias = "output-character-appearances-csv",
        value_name = "PATH",
        default_value = DEFAULT_APPEARANCES_CSV
    )]
    pub output_character_appearances_csv: PathBuf,

    /// Where to write the stacked bar chart
    #[arg(
        long = "output_num_characters_by_volume_plot",
        alias = "output-num-characters-by-volume-plot",
        value_name = "PATH",
        default_value = DEFAULT_VOLUME_COUNTS_PLOT
    )]
    pub output_num_characters_by_volume_plot: PathBuf,

    /// Where to write the tile chart
    #[arg(
        long = "output_characters_appearances",
        alias = "output-characters-appearances",
        value_name = "PATH",
        default_value = DEFAULT_CHARACTER_TILES_PLOT
    )]
    pub output_characters_appearances: PathBuf,

    /// Only write the long-format table, skip the charts
    #[arg(long)]
    pub pre_process_only: bool,

    /// Chart resolution in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Also draw the bar chart in the terminal
    #[arg(long)]
    pub preview: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_input_is_required() {
        let cli = Cli::try_parse_from(["appearance-graph", "wide.csv"]).unwrap();
        assert_eq!(cli.characters_by_volume_csv, PathBuf::from("wide.csv"));
        assert_eq!(
            cli.output_character_appearances_csv,
            PathBuf::from("character_appearances.csv")
        );
        assert_eq!(
            cli.output_num_characters_by_volume_plot,
            PathBuf::from("num_characters_by_volume.png")
        );
        assert_eq!(
            cli.output_characters_appearances,
            PathBuf::from("characters_appearances.png")
        );
        assert_eq!(cli.dpi, 300);
        assert!(!cli.pre_process_only && !cli.preview && !cli.debug);
    }

    #[test]
    fn overrides_accept_both_spellings() {
        let cli = Cli::try_parse_from([
            "appearance-graph",
            "wide.csv",
            "--output_character_appearances_csv",
            "long.csv",
            "--output-num-characters-by-volume-plot",
            "bars.png",
        ])
        .unwrap();
        assert_eq!(cli.output_character_appearances_csv, PathBuf::from("long.csv"));
        assert_eq!(cli.output_num_characters_by_volume_plot, PathBuf::from("bars.png"));
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        assert!(Cli::try_parse_from(["appearance-graph"]).is_err());
    }
}
