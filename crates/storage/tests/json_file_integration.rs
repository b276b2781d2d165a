use std::io::Write;

use storage::json_file::JsonFileRepository;
use storage::{QuestionRepository, Storage, StorageError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[tokio::test]
async fn reads_bare_array() {
    let file = write_temp(r#"["Introduce yourself.", "Why us?"]"#);
    let repo = JsonFileRepository::new(file.path());

    let questions = repo.load_questions().await.expect("load");
    assert_eq!(questions, ["Introduce yourself.", "Why us?"]);
}

#[tokio::test]
async fn reads_questions_document() {
    let file = write_temp(r#"{ "questions": ["자기소개를 해주세요.", "Second"] }"#);
    let storage = Storage::json_file(file.path());

    let questions = storage.questions.load_questions().await.expect("load");
    assert_eq!(questions, ["자기소개를 해주세요.", "Second"]);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = JsonFileRepository::new(dir.path().join("missing.json"));

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let file = write_temp(r#"{ "questions": [1, 2] }"#);
    let repo = JsonFileRepository::new(file.path());

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Parse { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("failed to parse"));
}
