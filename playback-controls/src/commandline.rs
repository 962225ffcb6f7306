use crate::configuration::Configuration;
use crate::error::ControlsError;
use crate::script::{read_script, replay};
use crate::store::ControlsHandle;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(version, about = "Replay media player control events and inspect the resulting state.")]
pub struct Commandline {
	/// Falls back to the built-in defaults if omitted
	#[clap(short = 'c', long = "config-file")]
	pub configuration_file_path: Option<PathBuf>,
	#[clap(subcommand)]
	pub command: BaseCommand,
}

#[derive(clap::Subcommand)]
pub enum BaseCommand {
	/// Dispatch every event of a JSON lines script and print the final snapshot
	Replay {
		script: PathBuf,
		/// Print the snapshot after every event instead
		#[clap(long)]
		every_step: bool,
	},
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub fn run(self) -> Result<(), ControlsError> {
		let configuration = match &self.configuration_file_path {
			Some(path) => Configuration::from_file(path)?,
			None => Configuration::default(),
		};

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(&configuration.log_filters))
			.with_writer(std::io::stderr)
			.init();

		match self.command {
			BaseCommand::Replay { script, every_step } => {
				let events = read_script(&script)?;
				info!("Replaying {} events from '{}'.", events.len(), script.display());

				let handle = ControlsHandle::new(configuration.initial.state());
				let snapshots = replay(&handle, events);
				if every_step {
					for snapshot in &snapshots {
						println!("{}", serde_json::to_string(snapshot)?);
					}
				} else {
					println!("{}", serde_json::to_string_pretty(&handle.state())?);
				}
			}
			BaseCommand::Configuration => print!("{}", toml::to_string_pretty(&configuration)?),
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use clap::Parser;

	#[test]
	fn should_parse_replay_command() {
		let commandline = Commandline::try_parse_from(["playback-controls", "-c", "controls.toml", "replay", "events.jsonl"])
			.expect("Failed to parse commandline");

		assert_eq!(Some(PathBuf::from("controls.toml")), commandline.configuration_file_path);
		assert!(matches!(
			commandline.command,
			BaseCommand::Replay { ref script, every_step: false } if script == &PathBuf::from("events.jsonl")
		));
	}

	#[test]
	fn should_parse_every_step_flag() {
		let commandline = Commandline::try_parse_from(["playback-controls", "replay", "--every-step", "events.jsonl"])
			.expect("Failed to parse commandline");

		assert!(matches!(commandline.command, BaseCommand::Replay { every_step: true, .. }));
	}

	#[test]
	fn should_require_a_command() {
		assert!(Commandline::try_parse_from(["playback-controls"]).is_err());
	}
}
