//! Sample note contents.

/// Note with `count` cards in `deck`, questions `"<deck> question <n>"`.
pub fn deck_note(deck: &str, count: usize) -> String {
    let mut content = format!("#flashcards/{}\n\n", deck.replace('.', "/"));
    for n in 1..=count {
        content.push_str(&format!("{deck} question {n}\n?\n{deck} answer {n}\n\n"));
    }
    content
}

/// Note in the default deck with a review marker and multi-line blocks.
pub fn mixed_note() -> &'static str {
    "# Borrowing\n\
     Some prose that is not a card.\n\
     \n\
     What does &mut guarantee?\n\
     ?\n\
     Exclusive access\n\
     for the borrow's lifetime.\n\
     #review-flashcard\n\
     \n\
     Name the two borrow kinds\n\
     ?\n\
     Shared and mutable\n\
     \n\
     #flashcards\n"
}
