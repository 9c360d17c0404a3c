use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{debug, error, info};

use decowriter::io::prelude::*;
use decowriter::DecoWriter;

const CHUNK_SIZE: usize = 4096;

#[derive(Debug, Parser)]
#[command(about = "Add a prefix and a suffix to every line of the input")]
struct Args {
	#[arg(
		short,
		long,
		help = "Bytes written before each line",
		default_value = ""
	)]
	prefix: OsString,

	#[arg(
		short,
		long,
		help = "Bytes written before each line terminator",
		default_value = ""
	)]
	suffix: OsString,

	#[arg(
		long = "level",
		help = "Console log level",
		default_value = "warn"
	)]
	log_level: log::LevelFilter,

	#[arg(
		long = "color",
		help = "Specify whether to show colors",
		default_value = "auto"
	)]
	color: Color,

	#[arg(help = "File to read from, `-` for stdin", default_value = "-")]
	path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Color {
	Always,
	Never,
	Auto,
}

fn main() {
	if let Err(e) = try_main() {
		error!("{e:#}");
		std::process::exit(1);
	}
}

fn try_main() -> Result<()> {
	let args = Args::parse();

	setup_console(&args)?;
	debug!("args: {args:#?}");

	let input: Box<dyn Read> = if args.path.as_os_str() == "-" {
		Box::new(io::stdin().lock())
	} else {
		let file = File::open(&args.path).with_context(|| {
			format!("failed to open {}", args.path.display())
		})?;
		Box::new(file)
	};

	let output = BufWriter::new(io::stdout().lock());
	let mut writer = DecoWriter::new(
		output,
		args.prefix.as_encoded_bytes(),
		args.suffix.as_encoded_bytes(),
	);

	let consumed = copy(input, &mut writer)?;

	info!(
		"consumed {consumed} bytes, wrote {} bytes",
		writer.written()
	);
	Ok(())
}

fn copy<R, W>(mut input: R, writer: &mut DecoWriter<W>) -> Result<u64>
where
	R: Read,
	W: Write<Error = io::Error>,
{
	let mut buf = vec![0u8; CHUNK_SIZE];
	let mut consumed = 0u64;

	loop {
		let n = match input.read(&mut buf) {
			Ok(0) => break,
			Ok(n) => n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e).context("failed to read input"),
		};

		match writer.write(&buf[..n]) {
			Ok(nn) => consumed += nn as u64,
			Err(e) => {
				consumed += e.consumed() as u64;
				debug!("stopped after consuming {consumed} bytes");
				return Err(e.into_inner())
					.context("failed to write output");
			},
		}
	}

	Ok(consumed)
}

fn setup_console(args: &Args) -> Result<()> {
	use log::Level;

	#[rustfmt::skip]
	fn level_to_str(level: Level) -> colored::ColoredString {
		match level {
			Level::Info =>  " INF ".black().on_bright_green(),
			Level::Warn =>  " WRN ".black().on_bright_yellow(),
			Level::Error => " ERR ".black().on_bright_red(),
			Level::Debug => " DBG ".black().on_bright_white(),
			Level::Trace => " TRC ".black().on_white(),
		}
	}

	let output = io::stderr();

	let should_use_colors = args.color == Color::Always
		|| (output.is_terminal() && args.color == Color::Auto);

	colored::control::set_override(should_use_colors);
	fern::Dispatch::new()
		.level(args.log_level)
		.format(|out, message, record| {
			out.finish(format_args!(
				"[{:<8} {}] {}",
				chrono::Local::now()
					.format("%H:%M:%S")
					.to_string()
					.cyan()
					.bold(),
				level_to_str(record.level()),
				message
			))
		})
		.chain(output)
		.apply()
		.context("failed to install logger")
}
