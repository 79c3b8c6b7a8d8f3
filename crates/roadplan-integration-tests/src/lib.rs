//! Scripted console sessions for end-to-end tests.

use roadplan_cli::{AppConfig, Session};
use roadplan_core::RoadNetwork;
use std::io::Cursor;
use tempfile::TempDir;

/// Result of replaying a script through the console.
pub struct Transcript {
    /// Everything written to stdout
    pub output: String,
    /// Store state at exit
    pub network: RoadNetwork,
    /// Contents of the city export, if written
    pub cities_file: Option<String>,
    /// Contents of the road export, if written
    pub roads_file: Option<String>,
    _dir: TempDir,
}

/// Feed `commands` to a fresh session in a scratch directory.
///
/// Each entry is one menu command with its answers, one line per prompt.
pub fn replay(commands: &[&str]) -> std::io::Result<Transcript> {
    let dir = tempfile::tempdir()?;
    let config = AppConfig::in_dir(dir.path());

    let mut input = commands.join("\n");
    input.push('\n');
    let mut session = Session::new(&config, Cursor::new(input.into_bytes()), Vec::new());
    session.run()?;

    let (network, output) = session.into_parts();
    Ok(Transcript {
        output: String::from_utf8_lossy(&output).into_owned(),
        network,
        cities_file: std::fs::read_to_string(&config.cities_file).ok(),
        roads_file: std::fs::read_to_string(&config.roads_file).ok(),
        _dir: dir,
    })
}
