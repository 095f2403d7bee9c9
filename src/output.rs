use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use crate::menu::{DateFormat, DayRecord};

/// Where the JSON goes: standard output, or a file that is created or truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Destination {
    pub fn write(&self, days: &[DayRecord], format: DateFormat, pretty: bool) -> crate::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                write_records(&mut out, days, format, pretty)?;
                out.flush()?;
            }
            Self::File(path) => {
                let mut out = BufWriter::new(File::create(path)?);
                write_records(&mut out, days, format, pretty)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

/// Writes the days as one JSON array followed by a newline.
pub fn write_records<W: Write>(
    writer: &mut W,
    days: &[DayRecord],
    format: DateFormat,
    pretty: bool,
) -> crate::Result<()> {
    let formatted: Vec<_> = days.iter().map(|day| day.formatted(format)).collect();
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &formatted)?;
    } else {
        serde_json::to_writer(&mut *writer, &formatted)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
