use crate::numerical::sampler::Point;
use chrono::Local;
use csv::Writer;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io::{self, Write};

/// "off"/"none" → None, otherwise the matching filter
pub fn parse_level(level: &str) -> Result<Option<LevelFilter>, String> {
    match level.to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        other => Err(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            other
        )),
    }
}

/// Terminal logger at `level`; with `to_file` the same records also go to log_<date>.txt.
/// A logger that is already installed is kept.
pub fn init_logger(level: &str, to_file: bool) -> Result<(), String> {
    let Some(log_option) = parse_level(level)? else {
        return Ok(());
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name).map_err(|e| format!("cannot create {}: {}", name, e))?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
    }
    if CombinedLogger::init(loggers).is_err() {
        log::debug!("logger already initialized");
    }
    Ok(())
}

/// tab separated x, y columns; holes are written as empty y
pub fn save_samples_to_file(points: &[Option<Point>], xs: &[f64], filename: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "x\ty")?;
    for (x, p) in xs.iter().zip(points) {
        match p {
            Some(p) => writeln!(file, "{}\t{}", p.x, p.y)?,
            None => writeln!(file, "{}\t", x)?,
        }
    }
    Ok(())
}

pub fn save_samples_to_csv(points: &[Option<Point>], xs: &[f64], filename: &str) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["x", "y"])?;
    for (x, p) in xs.iter().zip(points) {
        let row = match p {
            Some(p) => [p.x.to_string(), p.y.to_string()],
            None => [x.to_string(), String::new()],
        };
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::sampler::{grid, sample_with};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn"), Ok(Some(LevelFilter::Warn)));
        assert_eq!(parse_level("OFF"), Ok(None));
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_repeated_init_is_tolerated() {
        assert!(init_logger("error", false).is_ok());
        assert!(init_logger("error", false).is_ok());
        assert!(init_logger("verbose", false).is_err());
    }

    #[test]
    fn test_csv_keeps_holes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        let points = sample_with("1/x", (-1.0, 1.0), (-10.0, 10.0), 2).into_value().unwrap();
        let xs = grid((-1.0, 1.0), 2);
        save_samples_to_csv(&points, &xs, path.to_str().unwrap()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["x,y", "-1,-1", "0,", "1,1"]);
    }

    #[test]
    fn test_tab_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        let points = sample_with("x", (0.0, 1.0), (0.0, 1.0), 1).into_value().unwrap();
        save_samples_to_file(&points, &grid((0.0, 1.0), 1), path.to_str().unwrap()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "x\ty\n0\t0\n1\t1\n");
    }
}
