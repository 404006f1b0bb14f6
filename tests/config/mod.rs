use galera_checks::cli;
use galera_checks::config::*;

use mktemp::Temp;
use std::io::prelude::*;
use std::fs::File;

#[test]
fn load_client_section() {
    let my_cnf = r#"
[client]
user = monitor
password = toor
host = db1.example.com
socket = /var/lib/mysql/mysql.sock
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
    assert_eq!(config.password, Some("toor".to_string()));
    assert_eq!(config.hostname, "db1.example.com");
    assert_eq!(config.socket, Some("/var/lib/mysql/mysql.sock".to_string()));
    assert_eq!(config.port, 3306);
}

#[test]
fn ini_overrides_command_line_and_keeps_the_rest() {
    let my_cnf = r#"
[client]
password = from-file
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let path = temp_file.to_path_buf();
    let args = vec!["check-percona-cluster-size",
                    "-u", "monitor", "-p", "from-cli", "-h", "db2", "-e", "3",
                    "-i", path.to_str().unwrap()];
    let options = cli::parse_args(cli::cluster_size_command(), args).unwrap();

    let config = options.resolve().unwrap();

    assert_eq!(config.password, Some("from-file".to_string()));
    assert_eq!(config.user, "monitor");
    assert_eq!(config.hostname, "db2");
    assert_eq!(config.expected, Some(3));
}

#[test]
fn other_sections_are_ignored() {
    let my_cnf = r#"
[mysqld]
user = mysql
port = 3307

[client]
user = monitor
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
    assert_eq!(config.port, 3306);
}

#[test]
fn alternate_section() {
    let my_cnf = r#"
[client]
user = root

[galera]
user = monitor
port = 3307
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions {
        ini: Some(temp_file.to_path_buf()),
        ini_section: "galera".to_string(),
        ..Default::default()
    };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
    assert_eq!(config.port, 3307);
}

#[test]
fn missing_section_keeps_options() {
    let my_cnf = r#"
[mysqld]
user = mysql
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions {
        user: "monitor".to_string(),
        ini: Some(temp_file.to_path_buf()),
        ..Default::default()
    };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
}

#[test]
fn unknown_keys_are_ignored() {
    let my_cnf = r#"
[client]
user = monitor
default-character-set = utf8
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
}

#[test]
fn invalid_expected_from_ini_is_an_error() {
    let my_cnf = r#"
[client]
expected = many
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let err = options.resolve().unwrap_err();

    assert!(err.is_config_error());
}

#[test]
fn bare_keys_in_other_sections_keep_client_section() {
    let my_cnf = "[mysqld]\nskip-name-resolve\n[client]\nuser = monitor\npassword = toor\n";
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
    assert_eq!(config.password, Some("toor".to_string()));
}

#[test]
fn includedir_directive_is_skipped() {
    let my_cnf = "!includedir /etc/mysql/conf.d/\n[client]\nuser = monitor\n";
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
}

#[test]
fn trailing_comments_and_backslashes_in_values() {
    let my_cnf = r#"
[client]
user = monitor # sensu
password = p\ass
"#;
    let temp_file = create_temp_ini_file_from_string(my_cnf);
    let options = CheckOptions { ini: Some(temp_file.to_path_buf()), ..Default::default() };

    let config = options.resolve().unwrap();

    assert_eq!(config.user, "monitor");
    assert_eq!(config.password, Some("p\\ass".to_string()));
}

fn create_temp_ini_file_from_string(content: &str) -> Temp {
    let temp_file = Temp::new_file().unwrap();
    let mut f = File::create(temp_file.to_path_buf()).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_data().unwrap();

    temp_file
}
