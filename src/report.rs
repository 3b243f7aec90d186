//! Output side: stdout tables and CSV serialization.

use std::fmt::Display;
use std::io::Write;

use crate::error::RatingError;
use crate::indices::RankedEntry;
use crate::stats::TeamStatistics;

/// Statistics table as CSV: one row per team in the given order.
pub fn write_stats_csv<W: Write>(
    writer: W,
    stats_list: &[(String, TeamStatistics)],
) -> Result<(), RatingError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["team", "wins", "losses", "draws", "wp", "owp", "oowp", "rpi"])?;

    for (team, stats) in stats_list {
        csv_writer.write_record(&[
            team.clone(),
            stats.wins.to_string(),
            stats.losses.to_string(),
            stats.draws.to_string(),
            stats.wp.to_string(),
            stats.owp.to_string(),
            stats.oowp.to_string(),
            stats.rpi.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Any ranked index result as CSV.
pub fn write_index_csv<W: Write, V: Display>(
    writer: W,
    entries: &[RankedEntry<V>],
) -> Result<(), RatingError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["rank", "team", "value"])?;

    for entry in entries {
        csv_writer.write_record(&[
            entry.rank.to_string(),
            entry.team.clone(),
            entry.value.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Aligned standings table for the terminal.
pub fn format_standings(stats_list: &[(String, TeamStatistics)]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>4} | {:30} | {:>4} {:>4} {:>4} | {:>6} {:>6} {:>6} {:>6}\n",
        "#", "team", "W", "L", "D", "WP", "OWP", "OOWP", "RPI"
    ));

    for (i, (team, stats)) in stats_list.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} | {:30} | {:>4} {:>4} {:>4} | {:>6.2} {:>6.2} {:>6.2} {:>6.2}\n",
            i + 1,
            team,
            stats.wins,
            stats.losses,
            stats.draws,
            stats.wp,
            stats.owp,
            stats.oowp,
            stats.rpi,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(String, TeamStatistics)> {
        vec![(
            "Team A".to_string(),
            TeamStatistics {
                wins: 2,
                losses: 1,
                draws: 1,
                wp: 0.63,
                owp: 0.5,
                oowp: 0.45,
                rpi: 0.52,
            },
        )]
    }

    #[test]
    fn stats_csv_has_header_and_rows() {
        let mut buffer = Vec::new();
        write_stats_csv(&mut buffer, &sample()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "team,wins,losses,draws,wp,owp,oowp,rpi"
        );
        assert_eq!(lines.next().unwrap(), "Team A,2,1,1,0.63,0.5,0.45,0.52");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn index_csv_round_trips_entries() {
        let entries = vec![
            RankedEntry { rank: 1, team: "Team A".to_string(), value: 3 },
            RankedEntry { rank: 2, team: "Team B".to_string(), value: 1 },
        ];

        let mut buffer = Vec::new();
        write_index_csv(&mut buffer, &entries).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("rank,team,value\n"));
        assert!(text.contains("1,Team A,3"));
        assert!(text.contains("2,Team B,1"));
    }

    #[test]
    fn standings_table_lists_each_team_once() {
        let text = format_standings(&sample());
        assert_eq!(text.matches("Team A").count(), 1);
        assert!(text.contains("RPI"));
    }
}
