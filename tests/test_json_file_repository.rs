mod helpers;

use anyhow::Result;
use helpers::TestNotebook;
use tinynote::application::{NoteAdder, NoteDeleter, NoteRepository, NoteViewer};
use tinynote::domain::DomainError;

#[test]
fn given_added_note_when_reopening_then_note_is_persisted() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::new()?;
    let mut repo = notebook.open_repository()?;

    // Act
    NoteAdder::new(&mut repo).add_note("T", "C")?;
    drop(repo);
    let reopened = notebook.open_repository()?;

    // Assert
    let note = NoteViewer::new(reopened).view_note("T")?;
    assert_eq!(note.content, "C");
    Ok(())
}

#[test]
fn given_added_then_deleted_note_when_viewing_then_reports_not_found() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::new()?;
    let mut repo = notebook.open_repository()?;
    NoteAdder::new(&mut repo).add_note("T", "C")?;

    // Act
    NoteDeleter::new(&mut repo).delete_note("T")?;

    // Assert
    let result = notebook.open_repository()?.get_note("T");
    assert_eq!(result, Err(DomainError::NoteNotFound("T".to_string())));
    Ok(())
}

#[test]
fn given_missing_title_when_deleting_then_file_is_not_created() -> Result<()> {
    let notebook = TestNotebook::new()?;
    let mut repo = notebook.open_repository()?;

    let result = NoteDeleter::new(&mut repo).delete_note("missing");

    assert!(matches!(result, Err(DomainError::NoteNotFound(_))));
    assert!(!notebook.path.exists());
    Ok(())
}

#[test]
fn given_existing_file_when_opening_then_loads_notes_in_file_order() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::with_contents(
        r#"{
  "zebra": {"content": "z", "created": "2024-01-02T10:00:00.000001"},
  "apple": {"content": "a", "created": "2024-01-01T09:00:00"}
}"#,
    )?;

    // Act
    let repo = notebook.open_repository()?;

    // Assert
    assert_eq!(repo.list_titles()?, vec!["zebra".to_string(), "apple".to_string()]);
    assert_eq!(repo.get_note("apple")?.created, "2024-01-01T09:00:00");
    Ok(())
}

#[test]
fn given_duplicate_title_when_adding_then_overwrites_in_place() -> Result<()> {
    // Arrange
    let notebook = TestNotebook::new()?;
    let mut repo = notebook.open_repository()?;
    NoteAdder::new(&mut repo).add_note("first", "1")?;
    NoteAdder::new(&mut repo).add_note("second", "2")?;

    // Act
    NoteAdder::new(&mut repo).add_note("first", "one")?;

    // Assert
    let json = notebook.read_json()?;
    let object = json.as_object().expect("Notebook is a mapping");
    assert_eq!(object.len(), 2);
    assert_eq!(object["first"]["content"], "one");
    assert_eq!(
        notebook.open_repository()?.list_titles()?,
        vec!["first".to_string(), "second".to_string()]
    );
    Ok(())
}

#[test]
fn given_notebook_when_writing_then_uses_two_space_indent() -> Result<()> {
    let notebook = TestNotebook::new()?;
    let mut repo = notebook.open_repository()?;

    NoteAdder::new(&mut repo).add_note("T", "C")?;

    let raw = std::fs::read_to_string(&notebook.path)?;
    assert!(raw.starts_with("{\n  \"T\": {\n    \"content\": \"C\","));
    Ok(())
}

#[test]
fn given_invalid_json_file_when_opening_then_fails_with_context() -> Result<()> {
    let notebook = TestNotebook::with_contents("[1, 2")?;

    let result = notebook.open_repository();

    let message = format!("{:#}", result.expect_err("Corrupt notebook must not load"));
    assert!(message.contains("not valid JSON"), "{message}");
    Ok(())
}

#[cfg(unix)]
#[test]
fn given_shared_notebook_when_adding_and_deleting_then_file_mode_is_kept() -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    // Arrange
    let notebook = TestNotebook::with_contents("{}")?;
    fs::set_permissions(&notebook.path, fs::Permissions::from_mode(0o644))?;
    let mut repo = notebook.open_repository()?;

    // Act
    NoteAdder::new(&mut repo).add_note("T", "C")?;
    let after_add = fs::metadata(&notebook.path)?.permissions().mode() & 0o777;
    NoteDeleter::new(&mut repo).delete_note("T")?;
    let after_delete = fs::metadata(&notebook.path)?.permissions().mode() & 0o777;

    // Assert
    assert_eq!(after_add, 0o644);
    assert_eq!(after_delete, 0o644);
    Ok(())
}

#[cfg(unix)]
#[test]
fn given_new_notebook_when_adding_then_file_gets_default_mode() -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    // Arrange
    let notebook = TestNotebook::new()?;
    let reference = notebook.path.with_file_name("reference.json");
    fs::write(&reference, "{}")?;
    let mut repo = notebook.open_repository()?;

    // Act
    NoteAdder::new(&mut repo).add_note("T", "C")?;

    // Assert
    let mode = fs::metadata(&notebook.path)?.permissions().mode() & 0o777;
    let expected = fs::metadata(&reference)?.permissions().mode() & 0o777;
    assert_eq!(mode, expected, "mode {mode:o}, expected {expected:o}");
    Ok(())
}
