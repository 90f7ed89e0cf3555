//! Plain-text and JSON renderings of bridges and crossing reports.
//!
//! Lengths are printed in feet, paces in feet per minute and times in
//! minutes.

use std::io::Write;

use ropebridge_core::{Bridge, BridgeCrossing, CrossingReport, Hiker, Trip};

use crate::CliError;

/// List every bridge and the hikers joining at it.
pub(crate) fn write_bridges(writer: &mut dyn Write, bridges: &[Bridge]) -> Result<(), CliError> {
    writeln!(writer, "*** Bridge input data ***").map_err(CliError::WriteOutput)?;
    for bridge in bridges {
        writeln!(writer, "Bridge ID: {}", bridge.id()).map_err(CliError::WriteOutput)?;
        writeln!(writer, "Length: {} feet", bridge.length()).map_err(CliError::WriteOutput)?;
        writeln!(writer, "Hikers:").map_err(CliError::WriteOutput)?;
        write_hikers(writer, bridge.hikers())?;
    }
    Ok(())
}

fn write_hikers(writer: &mut dyn Write, hikers: &[Hiker]) -> Result<(), CliError> {
    for hiker in hikers {
        writeln!(
            writer,
            "  Name: {}, Pace: {} feet per minute",
            hiker.name(),
            hiker.pace()
        )
        .map_err(CliError::WriteOutput)?;
    }
    writeln!(writer).map_err(CliError::WriteOutput)
}

/// Replay the trips walked on every bridge with a running total.
pub(crate) fn write_trace(
    writer: &mut dyn Write,
    report: &CrossingReport,
) -> Result<(), CliError> {
    writeln!(writer, "*** Beginning to cross bridges ***").map_err(CliError::WriteOutput)?;
    let mut running = 0.0;
    for crossing in report.crossings() {
        running += crossing.duration();
        write_crossing(writer, crossing)?;
        writeln!(writer, "Total time: {running}").map_err(CliError::WriteOutput)?;
    }
    writeln!(writer).map_err(CliError::WriteOutput)
}

fn write_crossing(writer: &mut dyn Write, crossing: &BridgeCrossing) -> Result<(), CliError> {
    writeln!(
        writer,
        "Bridge {} (length {} feet)",
        crossing.bridge(),
        crossing.length()
    )
    .map_err(CliError::WriteOutput)?;
    let Some(fastest) = crossing.fastest() else {
        return writeln!(writer, "\tNo hikers waiting").map_err(CliError::WriteOutput);
    };
    writeln!(
        writer,
        "\tThe fastest hiker is {} with a pace of {}",
        fastest.name(),
        fastest.pace()
    )
    .map_err(CliError::WriteOutput)?;
    for trip in crossing.trips() {
        let written = match trip {
            Trip::Over { ferried, elapsed } => writeln!(
                writer,
                "\tHiker {} crossed (pace: {}). Total time on bridge {elapsed}",
                ferried.name(),
                ferried.pace()
            ),
            Trip::Back { runner, elapsed } => writeln!(
                writer,
                "\t\tHiker {} crossed back. Total time on bridge {elapsed}",
                runner.name()
            ),
        };
        written.map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Print each bridge's duration in id order followed by the total.
pub(crate) fn write_summary(
    writer: &mut dyn Write,
    report: &CrossingReport,
) -> Result<(), CliError> {
    writeln!(writer, "*** Result Summary ***").map_err(CliError::WriteOutput)?;
    writeln!(writer, "Bridge times:").map_err(CliError::WriteOutput)?;
    for (id, duration) in report.durations() {
        writeln!(writer, "\tBridge {id}: {duration} minutes").map_err(CliError::WriteOutput)?;
    }
    writeln!(writer, "Total time: {} minutes", report.total()).map_err(CliError::WriteOutput)
}

/// Print the whole report as pretty JSON.
pub(crate) fn write_json(writer: &mut dyn Write, report: &CrossingReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
