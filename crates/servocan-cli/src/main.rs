use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use servocan_core::validate::check_write;
use servocan_core::{EncodedMessage, ParsedResponse, RegisterCatalog, legacy, text, wire};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SERVOCAN_BUILD_COMMIT"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "servocan")]
#[command(version = VERSION)]
#[command(
    about = "Encoder/decoder for the Hitec CAN servo register protocol.",
    long_about = None,
    after_help = "Examples:\n  servocan encode write 1 0x0C 1500\n  servocan encode --hex set-can-id 1 0x0105\n  servocan decode \"00 76 01 0A 34 12\"\n  servocan registers --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build outgoing frames and print them without touching a bus.
    Encode {
        /// Use the extended arbitration-ID convention
        #[arg(long)]
        extended: bool,

        /// Print frames as hex text instead of JSON
        #[arg(long)]
        hex: bool,

        /// Skip the write validators (send deliberately malformed frames)
        #[arg(long)]
        force: bool,

        #[command(subcommand)]
        command: EncodeCommands,
    },

    /// Parse a response payload (hex bytes) into structured fields.
    Decode {
        /// Payload bytes as hex, e.g. "00 76 01 0A 34 12"
        payload: String,

        /// Print JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },

    /// List the register catalog.
    Registers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum EncodeCommands {
    /// Write a single 16-bit register.
    Write {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address: u8,
        #[arg(value_parser = parse_u16)]
        value: u16,
    },
    /// Write two registers in one frame.
    WriteDual {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address_a: u8,
        #[arg(value_parser = parse_u16)]
        value_a: u16,
        #[arg(value_parser = parse_u8)]
        address_b: u8,
        #[arg(value_parser = parse_u16)]
        value_b: u16,
    },
    /// Read a single register.
    Read {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address: u8,
    },
    /// Read two registers.
    ReadDual {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address_a: u8,
        #[arg(value_parser = parse_u8)]
        address_b: u8,
    },
    /// Save settings to flash and reboot the servo.
    SaveReset {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
    },
    /// Set the servo's CAN ID (low byte, then high byte when non-zero).
    SetCanId {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u16)]
        new_can_id: u16,
    },
    /// Set the servo receive ID.
    SetServoId {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u16)]
        new_id: u16,
    },
    /// Set the CAN mode register (0 = standard, 1 = extended).
    SetCanMode {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u16)]
        mode: u16,
    },
    /// Command a new position.
    Position {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u16)]
        position: u16,
    },
    /// Write a register using the legacy 8-byte frame.
    LegacyWrite {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address: u8,
        #[arg(value_parser = parse_u16)]
        value: u16,
    },
    /// Read a register using the legacy 8-byte frame.
    LegacyRead {
        #[arg(value_parser = parse_u8)]
        servo_id: u8,
        #[arg(value_parser = parse_u8)]
        address: u8,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            extended,
            hex,
            force,
            command,
        } => cmd_encode(extended, hex, force, command),
        Commands::Decode { payload, json } => cmd_decode(&payload, json),
        Commands::Registers { json } => cmd_registers(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_encode(
    extended: bool,
    hex: bool,
    force: bool,
    command: EncodeCommands,
) -> Result<(), CliError> {
    let catalog = RegisterCatalog::new();

    if !force {
        validate_encode(&catalog, &command)?;
    }

    let frames = match command {
        EncodeCommands::Write {
            servo_id,
            address,
            value,
        } => vec![wire::build_write(servo_id, address, value, extended)],
        EncodeCommands::WriteDual {
            servo_id,
            address_a,
            value_a,
            address_b,
            value_b,
        } => vec![wire::build_write_dual(
            servo_id, address_a, value_a, address_b, value_b, extended,
        )],
        EncodeCommands::Read { servo_id, address } => {
            vec![wire::build_read(servo_id, address, extended)]
        }
        EncodeCommands::ReadDual {
            servo_id,
            address_a,
            address_b,
        } => vec![wire::build_read_dual(servo_id, address_a, address_b, extended)],
        EncodeCommands::SaveReset { servo_id } => vec![wire::save_and_reset(servo_id, extended)],
        EncodeCommands::SetCanId {
            servo_id,
            new_can_id,
        } => wire::set_can_id(servo_id, new_can_id, extended),
        EncodeCommands::SetServoId { servo_id, new_id } => {
            wire::set_servo_id(servo_id, new_id, extended)
        }
        EncodeCommands::SetCanMode { servo_id, mode } => {
            vec![wire::set_can_mode(servo_id, mode, extended)]
        }
        EncodeCommands::Position { servo_id, position } => {
            vec![wire::position_command(servo_id, position, extended)]
        }
        EncodeCommands::LegacyWrite {
            servo_id,
            address,
            value,
        } => vec![legacy::build_legacy_write(servo_id, address, value)],
        EncodeCommands::LegacyRead { servo_id, address } => {
            vec![legacy::build_legacy_read(servo_id, address)]
        }
    };

    for frame in &frames {
        print_frame(frame, hex)?;
    }
    Ok(())
}

fn validate_encode(catalog: &RegisterCatalog, command: &EncodeCommands) -> Result<(), CliError> {
    let checks: Vec<(u8, u8, u16)> = match command {
        EncodeCommands::Write {
            servo_id,
            address,
            value,
        } => vec![(*servo_id, *address, *value)],
        EncodeCommands::WriteDual {
            servo_id,
            address_a,
            value_a,
            address_b,
            value_b,
        } => vec![
            (*servo_id, *address_a, *value_a),
            (*servo_id, *address_b, *value_b),
        ],
        _ => Vec::new(),
    };
    for (servo_id, address, value) in checks {
        check_write(
            catalog,
            u32::from(servo_id),
            u32::from(address),
            u32::from(value),
        )
        .map_err(|err| {
            CliError::new(
                err.to_string(),
                Some("use --force to encode the frame anyway".to_string()),
            )
        })?;
    }
    Ok(())
}

fn print_frame(frame: &EncodedMessage, hex: bool) -> Result<(), CliError> {
    if hex {
        println!(
            "ID=0x{:03X} [{}] {} - {}",
            frame.arbitration_id,
            frame.payload.len(),
            text::format_hex_bytes(&frame.payload),
            text::describe_message(&frame.payload)
        );
    } else {
        let json = serde_json::to_string(frame)
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", json);
    }
    Ok(())
}

fn cmd_decode(payload: &str, json: bool) -> Result<(), CliError> {
    let bytes = text::parse_hex_input(payload).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("payload must be hex bytes, e.g. \"00 76 01 0A 34 12\"".to_string()),
        )
    })?;

    let catalog = RegisterCatalog::new();
    let parsed = parse_or_reject(&catalog, &bytes)?;

    if json {
        let rendered = serde_json::to_string(&parsed)
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", rendered);
        return Ok(());
    }

    match parsed {
        ParsedResponse::Single {
            servo_id,
            address,
            value,
            register_name,
        } => {
            println!(
                "Single Register Response: servo {servo_id}, {register_name} (0x{address:02X}) = {}",
                text::format_register_value(value, &register_name)
            );
        }
        ParsedResponse::Dual {
            servo_id,
            address_a,
            value_a,
            address_b,
            value_b,
            register_name_a,
            register_name_b,
        } => {
            println!("Dual Register Response: servo {servo_id}");
            println!(
                "  {register_name_a} (0x{address_a:02X}) = {}",
                text::format_register_value(value_a, &register_name_a)
            );
            println!(
                "  {register_name_b} (0x{address_b:02X}) = {}",
                text::format_register_value(value_b, &register_name_b)
            );
        }
    }
    Ok(())
}

fn parse_or_reject(catalog: &RegisterCatalog, bytes: &[u8]) -> Result<ParsedResponse, CliError> {
    servocan_core::parse_response(catalog, bytes).ok_or_else(|| {
        CliError::new(
            "payload is not a recognized response frame",
            Some("expected a single ('v') or dual ('V') register response".to_string()),
        )
    })
}

fn cmd_registers(json: bool) -> Result<(), CliError> {
    let catalog = RegisterCatalog::new();
    let definitions: Vec<_> = catalog.all().into_values().collect();

    if json {
        let rendered = serde_json::to_string_pretty(&definitions)
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", rendered);
        return Ok(());
    }

    for def in definitions {
        let access = if def.read_only { "ro" } else { "rw" };
        println!(
            "0x{:02X}  {:<14} {}  {}",
            def.address, def.name, access, def.description
        );
    }
    Ok(())
}

fn parse_number(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u32>()
    };
    parsed.map_err(|_| format!("invalid number: {trimmed:?} (decimal or 0x hex)"))
}

fn parse_u8(input: &str) -> Result<u8, String> {
    let value = parse_number(input)?;
    u8::try_from(value).map_err(|_| format!("value {value} out of range 0..=255"))
}

fn parse_u16(input: &str) -> Result<u16, String> {
    let value = parse_number(input)?;
    u16::try_from(value).map_err(|_| format!("value {value} out of range 0..=65535"))
}
