use ini::{Ini, ParseOption, Properties};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub static DEFAULT_HOSTNAME: &'static str = "localhost";
pub static DEFAULT_USER: &'static str = "root";
pub static DEFAULT_PORT: &'static str = "3306";
pub static DEFAULT_EXPECTED: &'static str = "1";
pub static DEFAULT_INI_SECTION: &'static str = "client";

/// Check options as given on the command line, before the ini file overlay and before any value
/// has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// MySQL host name
    pub hostname: String,
    /// MySQL user
    pub user: String,
    pub password: Option<String>,
    /// Unix socket; takes precedence over TCP if set
    pub socket: Option<String>,
    pub port: String,
    pub database: Option<String>,
    /// Expected number of cluster nodes; only used by the cluster size check
    pub expected: Option<String>,
    /// Ini file with credentials, e.g. `~/.my.cnf`
    pub ini: Option<PathBuf>,
    /// Section of the ini file to read
    pub ini_section: String,
}

impl Default for CheckOptions {
    /// Creates options for `root@localhost:3306` without password.
    fn default() -> CheckOptions {
        CheckOptions {
            hostname: DEFAULT_HOSTNAME.to_string(),
            user: DEFAULT_USER.to_string(),
            password: None,
            socket: None,
            port: DEFAULT_PORT.to_string(),
            database: None,
            expected: None,
            ini: None,
            ini_section: DEFAULT_INI_SECTION.to_string(),
        }
    }
}

impl CheckOptions {
    /// Overlays the ini file, if any, and validates the result.
    pub fn resolve(mut self) -> Result<CheckConfig, Error> {
        if let Some(path) = self.ini.clone() {
            self.load_ini_file(&path)?;
        }
        self.into_config()
    }

    /// Reads the configured section of an ini file and applies every known key. Values from the
    /// file always win over command line values.
    pub fn load_ini_file(&mut self, file_path: &Path) -> Result<(), Error> {
        let ini_error = |reason: String| Error::IniFile { path: file_path.to_path_buf(), reason: reason };
        let content = fs::read_to_string(file_path).map_err(|err| ini_error(err.to_string()))?;
        let ini = parse_option_file(&content).map_err(ini_error)?;
        match ini.section(Some(self.ini_section.as_str())) {
            Some(section) => {
                debug!("Applying section [{}] of ini file '{}'", self.ini_section, file_path.display());
                self.apply_section(section);
            }
            None => {
                warn!("Ini file '{}' has no section [{}]; keeping command line options", file_path.display(), self.ini_section);
            }
        }

        Ok(())
    }

    fn apply_section(&mut self, section: &Properties) {
        for (key, value) in section.iter() {
            if !self.apply_option(key, value) {
                debug!("Ignoring unknown ini key '{}'", key);
            }
        }
    }

    /// Sets the field named by `key`; returns `false` if there is no such field.
    pub fn apply_option(&mut self, key: &str, value: &str) -> bool {
        let value = value.to_string();
        match key {
            "host" | "hostname" => self.hostname = value,
            "user" => self.user = value,
            "password" => self.password = Some(value),
            "socket" => self.socket = Some(value),
            "port" => self.port = value,
            "database" => self.database = Some(value),
            "expected" => self.expected = Some(value),
            _ => return false,
        }
        true
    }

    fn into_config(self) -> Result<CheckConfig, Error> {
        let port = self.port.trim().parse::<u16>()
            .map_err(|_| Error::InvalidPort(self.port.clone()))?;
        let expected = match self.expected {
            Some(ref expected) => {
                let number = expected.trim().parse::<u32>()
                    .map_err(|_| Error::InvalidExpected(expected.clone()))?;
                Some(number)
            }
            None => None,
        };

        Ok(CheckConfig {
            hostname: self.hostname,
            user: self.user,
            password: self.password,
            socket: self.socket,
            port: port,
            database: self.database,
            expected: expected,
        })
    }
}

/// Parses a MySQL option file (my.cnf). Unlike plain ini, option files allow bare keys such as
/// `skip-name-resolve`, `!include` directives and trailing `#` comments; backslashes are kept
/// literally.
pub fn parse_option_file(content: &str) -> Result<Ini, String> {
    let normalized: Vec<String> = content.lines()
        .filter_map(normalize_option_line)
        .collect();
    let opt = ParseOption { enabled_quote: false, enabled_escape: false, ..ParseOption::default() };
    let ini = Ini::load_from_str_opt(&normalized.join("\n"), opt).map_err(|err| err.to_string())?;

    for (section, properties) in ini.iter() {
        if let Some((key, _)) = properties.iter().find(|&(key, _)| key.contains('\n') || key.contains('=')) {
            return Err(format!("malformed key '{}' in section [{}]", key.trim(), section.unwrap_or("")));
        }
    }

    Ok(ini)
}

/// Rewrites one option file line into plain `key=value` form; `None` drops the line.
fn normalize_option_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    if line.starts_with('!') {
        // TODO: follow !include and !includedir instead of skipping them
        debug!("Skipping option file directive '{}'", line);
        return None;
    }
    if line.starts_with('[') {
        return Some(line.to_string());
    }

    match line.find('=') {
        Some(pos) => {
            let key = line[..pos].trim();
            let value = unquote(strip_inline_comment(line[pos + 1..].trim()));
            Some(format!("{}={}", key, value))
        }
        None => Some(format!("{}=", strip_inline_comment(line))),
    }
}

/// Cuts a `#` or `;` comment that is not inside single or double quotes.
fn strip_inline_comment(value: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in value.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => (),
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '#') | (None, ';') => return value[..i].trim_end(),
            (None, _) => (),
        }
    }
    value
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Resolved and validated configuration of one check run.
#[derive(Clone, PartialEq)]
pub struct CheckConfig {
    pub hostname: String,
    pub user: String,
    pub password: Option<String>,
    pub socket: Option<String>,
    pub port: u16,
    pub database: Option<String>,
    pub expected: Option<u32>,
}

impl fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CheckConfig")
            .field("hostname", &self.hostname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("socket", &self.socket)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("expected", &self.expected)
            .finish()
    }
}

impl CheckConfig {
    /// Identifies the checked server in log messages, e.g. `root@localhost:3306`.
    pub fn id(&self) -> String {
        match self.socket {
            Some(ref socket) => format!("{}@{}", self.user, socket),
            None => format!("{}@{}:{}", self.user, self.hostname, self.port),
        }
    }
}
