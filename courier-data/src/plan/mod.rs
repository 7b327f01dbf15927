//! JSON plan documents.
//!
//! A plan document is an object with a single `commands` list. Each entry is
//! one step mapping a 1-based vehicle key to a command string:
//!
//! ```json
//! { "commands": [ { "1": "PICK UP", "2": "GO 0 1" }, { "2": "FORWARD" } ] }
//! ```

mod error;

use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Write};

use camino::Utf8Path;
use courier_core::{Command, CommandPlan, StepCommands, VehicleId};
use courier_fs::{create_utf8_file, ensure_parent_dir, open_utf8_file};
use serde::{Deserialize, Serialize};

pub use error::{PlanParseError, ReadPlanError, WritePlanError};

/// Wire form of a plan: per-step maps from 1-based vehicle keys to commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Steps in order.
    pub commands: Vec<BTreeMap<String, String>>,
}

impl PlanDocument {
    /// Convert into a typed plan for a fleet of `vehicle_count` vehicles.
    ///
    /// # Errors
    /// Returns [`PlanParseError`] for a key that is not a positive integer,
    /// two keys naming one vehicle, an unrecognised command string or a
    /// vehicle outside the fleet.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use courier_core::Command;
    /// use courier_data::PlanDocument;
    ///
    /// let document = PlanDocument {
    ///     commands: vec![BTreeMap::from([("1".to_owned(), "GO 0 1".to_owned())])],
    /// };
    /// let plan = document.into_plan(1).unwrap();
    /// assert_eq!(plan.get(0).and_then(|step| step.get(&0)), Some(&Command::Go { from: 0, to: 1 }));
    /// ```
    pub fn into_plan(self, vehicle_count: usize) -> Result<CommandPlan, PlanParseError> {
        let steps = self
            .commands
            .into_iter()
            .enumerate()
            .map(|(step, entries)| decode_step(step, entries))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CommandPlan::new(steps, vehicle_count)?)
    }

    /// Render a typed plan in wire form.
    #[must_use]
    pub fn from_plan(plan: &CommandPlan) -> Self {
        let commands = plan
            .iter()
            .map(|step| {
                step.iter()
                    .map(|(vehicle, command)| ((vehicle + 1).to_string(), command.to_string()))
                    .collect()
            })
            .collect();
        Self { commands }
    }
}

fn decode_step(
    step: usize,
    entries: BTreeMap<String, String>,
) -> Result<StepCommands, PlanParseError> {
    let mut commands = StepCommands::new();
    for (key, text) in entries {
        let vehicle = match key.trim().parse::<VehicleId>() {
            Ok(index) if index > 0 => index - 1,
            _ => return Err(PlanParseError::InvalidVehicleKey { step, key }),
        };
        let command = match text.parse::<Command>() {
            Ok(command) => command,
            Err(source) => return Err(PlanParseError::InvalidCommand { step, key, source }),
        };
        if commands.insert(vehicle, command).is_some() {
            return Err(PlanParseError::DuplicateVehicle { step, key });
        }
    }
    Ok(commands)
}

/// Read a plan document from a JSON file.
///
/// # Errors
/// Returns [`ReadPlanError::Io`] when the file cannot be read and
/// [`ReadPlanError::Json`] when it is not a plan document.
pub fn read_plan_document(path: &Utf8Path) -> Result<PlanDocument, ReadPlanError> {
    let file = open_utf8_file(path).map_err(|source| ReadPlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ReadPlanError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a plan document as JSON, creating parent directories as needed.
///
/// # Errors
/// Returns [`WritePlanError`] when the file cannot be created, encoded or
/// flushed.
pub fn write_plan_document(document: &PlanDocument, path: &Utf8Path) -> Result<(), WritePlanError> {
    let io_error = |source: std::io::Error| WritePlanError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(io_error)?;
    let file = create_utf8_file(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, document).map_err(|source| WritePlanError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)
}
