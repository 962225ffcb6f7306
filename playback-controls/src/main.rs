use clap::Parser;
use playback_controls::commandline::Commandline;
use playback_controls::error::ControlsError;

fn main() -> Result<(), ControlsError> {
	let commandline = match Commandline::try_parse() {
		Ok(commandline) => commandline,
		// --help and --version end up here as well
		Err(error) if !error.use_stderr() => error.exit(),
		Err(error) => return Err(error.into()),
	};

	commandline.run()
}
