use super::*;
use clap::CommandFactory;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_prepare() {
    let cli = parse(&["xcomp", "prepare"]);
    assert!(matches!(cli.command, CliCommand::Prepare));
    assert!(cli.config.is_none());
    assert!(cli.download_dir.is_none());
    assert!(cli.data_dir.is_none());
}

#[test]
fn cli_parse_global_overrides_after_subcommand() {
    let cli = parse(&[
        "xcomp",
        "merge",
        "--config",
        "/etc/xcomp.toml",
        "--download-dir",
        "/tmp/dl",
        "--data-dir",
        "site/data",
    ]);
    assert!(matches!(cli.command, CliCommand::Merge));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/xcomp.toml")));
    assert_eq!(cli.download_dir.as_deref(), Some(Path::new("/tmp/dl")));
    assert_eq!(cli.data_dir.as_deref(), Some(Path::new("site/data")));
}

#[test]
fn cli_parse_download() {
    match parse(&["xcomp", "download", "https://example.org/x.xml", "out/x.xml"]).command {
        CliCommand::Download { url, dest } => {
            assert_eq!(url, "https://example.org/x.xml");
            assert_eq!(dest, Path::new("out/x.xml"));
        }
        other => panic!("expected Download, got {:?}", other),
    }
}

#[test]
fn cli_parse_download_requires_dest() {
    assert!(Cli::try_parse_from(["xcomp", "download", "https://example.org/x"]).is_err());
}

#[test]
fn cli_parse_generate() {
    assert!(matches!(
        parse(&["xcomp", "generate"]).command,
        CliCommand::Generate
    ));
}

#[test]
fn cli_parse_init_dir() {
    match parse(&["xcomp", "init-dir", "downloads/doap_files"]).command {
        CliCommand::InitDir { path } => assert_eq!(path, Path::new("downloads/doap_files")),
        other => panic!("expected InitDir, got {:?}", other),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["xcomp", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        other => panic!("expected Completions, got {:?}", other),
    }
    assert!(Cli::try_parse_from(["xcomp", "completions", "cmd"]).is_err());
}

#[test]
fn cli_parse_manpage() {
    assert!(matches!(parse(&["xcomp", "manpage"]).command, CliCommand::Manpage));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["xcomp", "status"]).is_err());
}

#[test]
fn load_config_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        toml::to_string_pretty(&XcompConfig::default()).unwrap(),
    )
    .unwrap();
    let cli = parse(&[
        "xcomp",
        "prepare",
        "--config",
        path.to_str().unwrap(),
        "--data-dir",
        "elsewhere",
    ]);
    let cfg = cli.load_config().unwrap();
    assert_eq!(cfg.data_dir, Path::new("elsewhere"));
    assert_eq!(cfg.download_dir, Path::new("downloads"));
}

#[test]
fn download_validates_config_first() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("suite.xml");
    let mut cfg = XcompConfig::default();
    cfg.max_download_bytes = 0;
    let err = run_download(&cfg, "http://127.0.0.1:1/suite.xml", &dest).unwrap_err();
    assert!(err.to_string().contains("max_download_bytes"));
    assert!(!dest.exists());
}

#[test]
fn download_reports_unreachable_host() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = tempfile::tempdir().unwrap();
    let url = format!("http://127.0.0.1:{}/suite.xml", port);
    let err = run_download(&XcompConfig::default(), &url, &dir.path().join("suite.xml"))
        .unwrap_err();
    assert!(err.to_string().starts_with("could not download"));
}

#[test]
fn download_reports_rejection_by_server() {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
            );
        }
    });
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("suite.xml");
    let url = format!("http://127.0.0.1:{}/suite.xml", port);
    let err = run_download(&XcompConfig::default(), &url, &dest).unwrap_err();
    assert!(err.to_string().contains("rejected the download"));
    assert!(format!("{:#}", err).contains("HTTP 404"));
    assert!(!dest.exists());
}
