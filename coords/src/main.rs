use std::process::ExitCode;

use clap::{Parser, Subcommand};

use geod_coords::{
    engine,
    format::{format_input, format_value},
    Axis, Direction, Format, FormatInputError,
};

const ABOUT: &str = "Convert geographic coordinates between DD, DMS and DDM notations";

#[derive(Parser, Debug)]
#[command(version, about = ABOUT)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the first number found in the text
    Format {
        #[arg(
            help = "Text with the decimal degrees value (e.g. -25.938285)",
            allow_hyphen_values = true
        )]
        text: String,

        #[arg(short, long, default_value = "DD", help = "Notation: DD, DMS or DDM")]
        format: String,

        #[arg(short, long, default_value = "lat", help = "Axis: lat or lng")]
        axis: String,
    },
    /// Compose the decimal value from the degrees, minutes and seconds
    #[command(allow_negative_numbers = true)]
    Compose {
        #[arg(help = "Whole degrees, prefer -d S or -d W over the minus sign \
                      since the minutes and seconds are always added")]
        degrees: f64,

        #[arg(help = "Minutes, the fractional ones make the seconds ignored")]
        minutes: Option<f64>,

        #[arg(help = "Seconds")]
        seconds: Option<f64>,

        #[arg(short, long, help = "Hemisphere: N, S, E or W")]
        direction: Option<Direction>,

        #[arg(short, long, default_value = "lat", help = "Axis: lat or lng")]
        axis: Axis,

        #[arg(short, long, default_value = "DD", help = "Notation of the result")]
        format: Format,
    },
}

fn run(command: Command) -> Result<String, FormatInputError> {
    match command {
        Command::Format { text, format, axis } => {
            log::info!("Formatting {:?} as {} {}", text, format, axis);
            format_input(&text, &format, &axis)
        }
        Command::Compose {
            degrees,
            minutes,
            seconds,
            direction,
            axis,
            format,
        } => {
            let value = engine::from_dms(
                degrees,
                minutes.unwrap_or_default(),
                seconds.unwrap_or_default(),
                direction,
            );
            log::info!("{} composed to {}", axis, value);
            Ok(format_value(value, format, axis))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
