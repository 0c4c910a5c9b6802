//! Integration tests for the resume scorer

use resume_scorer::input::InputManager;
use resume_scorer::scoring::{JobContext, ScoreEngine};
use resume_scorer::ResumeScorerError;
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("Stanford"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeScorerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_oversized_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big_resume.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![b'a'; 64]).unwrap();

    let mut manager = InputManager::new().with_max_file_size(16);
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeScorerError::FileTooLarge(_))));
}

#[tokio::test]
async fn test_extract_and_score_end_to_end() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = ScoreEngine::new();
    let report = engine.score(&text, &JobContext::Title("Software Engineer".to_string()));

    assert!(report.total_score > 50);
    assert!(report.total_score <= 100);
    assert_eq!(report.feedback.len(), 5);
    // the fixture carries contact info and labelled sections
    assert!(report.breakdown.formatting >= 12);
    // technical skills are well represented
    assert!(report.breakdown.skills > 10);
}

#[tokio::test]
async fn test_scoring_is_deterministic_across_calls() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let engine = ScoreEngine::new();
    let first = engine.score(&text, &JobContext::None);
    let second = engine.score(&text, &JobContext::None);
    assert_eq!(first.total_score, second.total_score);
    assert_eq!(first.breakdown, second.breakdown);
    assert_eq!(first.feedback, second.feedback);
}
