//! Snapshot tests for quizbook-core using insta
//!
//! These tests pin the JSON handed to the save handler so that changes to the
//! wire format are caught.

use quizbook_core::{Book, BookEditor, Callbacks, Chapter, QuestionPair};

/// Helper to create a sample book for testing
fn sample_book() -> Book {
    Book::new(1, "T").with_chapters(vec![
        Chapter::new(1).with_pairs(vec![QuestionPair::new("Q1", "A1")])
    ])
}

#[test]
fn test_committed_scenario_snapshot() {
    let mut editor = BookEditor::new(sample_book());
    editor.set_chapter_count(2);
    editor.add_question(1).unwrap();
    editor.delete_question(0, 0).unwrap();

    insta::assert_json_snapshot!(editor.commit(), @r###"
    {
      "id": 1,
      "title": "T",
      "description": "",
      "chapters": [
        {
          "chapterNumber": 1,
          "questions": [],
          "answers": []
        },
        {
          "chapterNumber": 2,
          "questions": [
            "Example",
            ""
          ],
          "answers": [
            "Example",
            ""
          ]
        }
      ],
      "imageUrl": ""
    }
    "###);
}

#[test]
fn test_saved_book_snapshot() {
    let mut saved = None;
    let mut handler = Callbacks::new(|book| saved = Some(book), || {});

    let mut editor = BookEditor::new(Book::new(5, "Draft"));
    editor.set_title("Rust Basics");
    editor.set_description("Ownership and borrowing");
    editor.set_image_url("https://example.com/rust.png");
    editor.set_question_text(0, 0, "What owns a value?").unwrap();
    editor.set_answer_text(0, 0, "Exactly one binding").unwrap();
    editor.submit(&mut handler);
    drop(handler);

    insta::assert_json_snapshot!(saved.expect("book was saved"), @r###"
    {
      "id": 5,
      "title": "Rust Basics",
      "description": "Ownership and borrowing",
      "chapters": [
        {
          "chapterNumber": 1,
          "questions": [
            "What owns a value?"
          ],
          "answers": [
            "Exactly one binding"
          ]
        }
      ],
      "imageUrl": "https://example.com/rust.png"
    }
    "###);
}
