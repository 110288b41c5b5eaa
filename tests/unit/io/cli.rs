//! Tests for command-line parsing and the command runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use stitchgrid::StitchError;
    use stitchgrid::io::cli::{Cli, Command, CommandRunner, format_status};
    use stitchgrid::io::configuration::DEFAULT_SESSION_DIR;
    use stitchgrid::io::persistence::PatternStore;
    use tempfile::TempDir;

    fn write_two_tone_image(dir: &Path) -> PathBuf {
        let path = dir.join("source.png");
        let image = RgbaImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                Rgba([220, 30, 30, 255])
            } else {
                Rgba([30, 30, 220, 255])
            }
        });
        image.save(&path).unwrap();
        path
    }

    fn runner(session: &Path, command: Command) -> CommandRunner {
        CommandRunner::new(Cli {
            command,
            session: session.to_path_buf(),
            quiet: true,
        })
    }

    // Tests CLI parsing with minimal arguments
    #[test]
    fn test_cli_parsing_minimal() {
        let cli = Cli::try_parse_from(["stitchgrid", "generate", "photo.png"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Generate {
                image: PathBuf::from("photo.png"),
                colors: 8,
                width: None,
            }
        );
        assert_eq!(cli.session, PathBuf::from(DEFAULT_SESSION_DIR));
        assert!(cli.should_log());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all options
    #[test]
    fn test_cli_parsing_full() {
        let cli = Cli::try_parse_from([
            "stitchgrid",
            "--session",
            "work",
            "--quiet",
            "generate",
            "photo.png",
            "--colors",
            "12",
            "--width",
            "80",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Generate {
                image: PathBuf::from("photo.png"),
                colors: 12,
                width: Some(80),
            }
        );
        assert_eq!(cli.session, PathBuf::from("work"));
        assert!(!cli.should_log());
    }

    // Tests colour and width bounds are enforced at parse time
    // Verified by accepting any usize
    #[test]
    fn test_cli_rejects_out_of_range() {
        for args in [
            vec!["stitchgrid", "generate", "a.png", "-c", "1"],
            vec!["stitchgrid", "generate", "a.png", "-c", "101"],
            vec!["stitchgrid", "generate", "a.png", "-w", "4"],
            vec!["stitchgrid", "generate", "a.png", "-w", "501"],
            vec!["stitchgrid", "generate", "a.png", "-c", "many"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    // Tests the remaining subcommands parse their arguments
    #[test]
    fn test_cli_subcommands() {
        let toggle = Cli::try_parse_from(["stitchgrid", "toggle", "3", "4"]).unwrap();
        assert_eq!(toggle.command, Command::Toggle { x: 3, y: 4 });

        let render = Cli::try_parse_from(["stitchgrid", "render", "out.png", "-z", "2"]).unwrap();
        assert_eq!(
            render.command,
            Command::Render {
                output: PathBuf::from("out.png"),
                zoom: 2.0,
            }
        );

        let status = Cli::try_parse_from(["stitchgrid", "status", "-s", "elsewhere"]).unwrap();
        assert_eq!(status.command, Command::Status);
        assert_eq!(status.session, PathBuf::from("elsewhere"));

        assert!(Cli::try_parse_from(["stitchgrid", "clear"]).is_ok());
        assert!(Cli::try_parse_from(["stitchgrid"]).is_err());
    }

    // Tests generate, toggle, clear and render against one session directory
    #[test]
    fn test_runner_workflow() {
        let temp_dir = TempDir::new().unwrap();
        let image = write_two_tone_image(temp_dir.path());
        let session_dir = temp_dir.path().join("session");
        let runner = runner(&session_dir, Command::Status);

        let session = runner.generate(&image, 2, Some(10)).unwrap();
        assert_eq!(session.pattern().dimensions(), (10, 5));
        assert_eq!(session.pattern().legend().len(), 2);
        assert!(runner.store().load().is_some());

        assert!(runner.toggle(0, 0).unwrap());
        assert!(runner.toggle(9, 4).unwrap());
        assert_eq!(runner.load().unwrap().stats().stitched, 2);

        let cleared = runner.clear().unwrap();
        assert_eq!(cleared.stitched, 0);
        assert_eq!(cleared.total, 50);

        let output = temp_dir.path().join("chart.png");
        runner.render(&output, 0.5).unwrap();
        let chart = image::open(&output).unwrap();
        assert_eq!((chart.width(), chart.height()), (100, 50));
    }

    // Tests regenerating resets progress
    #[test]
    fn test_generate_resets_progress() {
        let temp_dir = TempDir::new().unwrap();
        let image = write_two_tone_image(temp_dir.path());
        let runner = runner(&temp_dir.path().join("session"), Command::Status);

        runner.generate(&image, 2, Some(10)).unwrap();
        runner.toggle(1, 1).unwrap();
        runner.generate(&image, 3, Some(20)).unwrap();

        let session = runner.load().unwrap();
        assert_eq!(session.progress().dimensions(), (20, 10));
        assert_eq!(session.progress().stitched_count(), 0);
    }

    // Tests run dispatches to the parsed command
    #[test]
    fn test_run_dispatch() {
        let temp_dir = TempDir::new().unwrap();
        let image = write_two_tone_image(temp_dir.path());
        let session_dir = temp_dir.path().join("session");

        let generate = Command::Generate {
            image,
            colors: 2,
            width: Some(6),
        };
        runner(&session_dir, generate).run().unwrap();
        runner(&session_dir, Command::Toggle { x: 5, y: 2 }).run().unwrap();

        let session = runner(&session_dir, Command::Status).load().unwrap();
        assert!(session.progress().is_stitched(5, 2).unwrap());
    }

    // Tests commands without a saved session fail cleanly
    #[test]
    fn test_missing_session() {
        let temp_dir = TempDir::new().unwrap();
        let runner = runner(&temp_dir.path().join("empty"), Command::Clear);

        assert!(matches!(
            runner.load(),
            Err(StitchError::InvalidParameter {
                parameter: "session",
                ..
            })
        ));
        assert!(runner.run().is_err());
    }

    // Tests toggles outside the grid are rejected without saving
    #[test]
    fn test_toggle_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let image = write_two_tone_image(temp_dir.path());
        let runner = runner(&temp_dir.path().join("session"), Command::Status);
        runner.generate(&image, 2, Some(10)).unwrap();

        assert!(matches!(
            runner.toggle(10, 0),
            Err(StitchError::CellOutOfRange { .. })
        ));
        assert_eq!(runner.load().unwrap().progress().stitched_count(), 0);
    }

    // Tests missing images surface as load errors
    #[test]
    fn test_generate_missing_image() {
        let temp_dir = TempDir::new().unwrap();
        let runner = runner(temp_dir.path(), Command::Status);

        assert!(matches!(
            runner.generate(&temp_dir.path().join("missing.png"), 4, None),
            Err(StitchError::ImageLoad { .. })
        ));
    }

    // Tests status output lists size, progress and the colour key
    #[test]
    fn test_format_status() {
        let mut session = stitchgrid::Session::new(crate::two_color_pattern());
        session.toggle(0, 0).unwrap();

        let status = format_status(&session);

        assert!(status.contains("Pattern: 3 x 2 stitches, 2 colours"));
        assert!(status.contains("Progress: 1 / 4 stitched (25.0%)"));
        assert!(status.contains("#ff0000  Red 1"));
        assert!(status.contains("#0000ff  Blue 2"));
        assert!(!status.contains("Empty"));
    }
}
