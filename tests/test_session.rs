mod helpers;

use anyhow::Result;
use helpers::TestNotebook;
use tinynote::application::NoteRepository;
use tinynote::cli::Session;

fn run_session(notebook: &TestNotebook, script: &str) -> Result<String> {
    let repo = notebook.open_repository()?;
    let mut output = Vec::new();
    Session::new(repo, script.as_bytes(), &mut output).run()?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn given_add_view_delete_script_when_running_then_round_trips() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::new()?;

    // Act
    let output = run_session(&notebook, "a\nT\nC\nv\nT\nd\nT\nv\nT\nq\n")?;

    // Assert
    assert!(output.starts_with("Welcome to TinyNote!\n"));
    assert!(output.contains("Note 'T' added."));
    assert!(output.contains("--- T ---\nC\n"));
    assert!(output.contains("Note 'T' deleted."));
    assert!(output.contains("Note 'T' not found."));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(notebook.open_repository()?.list_titles()?.is_empty());
    Ok(())
}

#[test]
fn given_notes_from_earlier_session_when_listing_then_shows_titles() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::new()?;
    run_session(&notebook, "a\nfirst\none\na\nsecond\ntwo\nq\n")?;

    // Act
    let output = run_session(&notebook, "l\nq\n")?;

    // Assert
    assert!(output.contains("- first\n- second\n"));
    Ok(())
}

#[test]
fn given_view_only_session_when_running_then_file_is_untouched() -> Result<()> {
    let notebook = TestNotebook::with_contents(r#"{"T": {"content": "C", "created": "x"}}"#)?;

    let output = run_session(&notebook, "v\nT\nl\nq\n")?;

    assert!(output.contains("C\nCreated: x\n"));
    assert_eq!(
        std::fs::read_to_string(&notebook.path)?,
        r#"{"T": {"content": "C", "created": "x"}}"#
    );
    Ok(())
}

#[test]
fn given_uppercase_commands_when_running_then_accepts_them() -> Result<()> {
    let notebook = TestNotebook::new()?;

    let output = run_session(&notebook, "A\nT\nC\nL\nQ\n")?;

    assert!(output.contains("- T\n"));
    assert!(output.ends_with("Goodbye!\n"));
    Ok(())
}
