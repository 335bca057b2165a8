//! Paragraph assembly over the whole document's text blocks.
//!
//! One paragraph is emitted per block carrying [`Role::BodyText`]; blocks
//! with any other role are skipped entirely; there is no partial
//! carry-over across non-body blocks. Within a paragraph, a line-final
//! hyphenated fragment is merged with the following line's leading
//! fragment into a single word flagged `is_dehyphenated`.

use crate::document::PageLayout;
use crate::elements::{Paragraph, Position, Role, TextBlock, Word};
use crate::statistics::CharacterStatistic;

/// Walk all pages in order and assemble body-text paragraphs.
pub fn assemble(pages: &[PageLayout]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for page in pages {
        for block in &page.blocks {
            if block.role != Role::BodyText {
                log::trace!(
                    "skipping {:?} block on page {}",
                    block.role,
                    page.number
                );
                continue;
            }
            if let Some(paragraph) = paragraph_from_block(block) {
                paragraphs.push(paragraph);
            }
        }
    }
    paragraphs
}

/// Collect a block's words in line order, merging hyphenated line breaks.
fn paragraph_from_block(block: &TextBlock) -> Option<Paragraph> {
    let mut words: Vec<Word> = Vec::new();
    for (line_index, line) in block.lines.iter().enumerate() {
        for (word_index, word) in line.words.iter().enumerate() {
            let continues_hyphenation = word_index == 0
                && line_index > 0
                && words.last().map(|w| w.is_hyphenated).unwrap_or(false);
            if continues_hyphenation {
                let leading = words.pop().expect("checked non-empty");
                words.push(merge_hyphenated(&leading, word));
            } else {
                words.push(word.clone());
            }
        }
    }
    Paragraph::from_words(words, block.position)
}

/// Merge a hyphenated line-final fragment with the next line's leading
/// fragment. The hyphen glyph is dropped; the merged word keeps the
/// characters in reading order (the fragments come from different lines,
/// so re-sorting by x would scramble them).
fn merge_hyphenated(leading: &Word, trailing: &Word) -> Word {
    let mut characters = leading.characters.clone();
    characters.pop();
    characters.extend(trailing.characters.iter().cloned());

    let text = format!(
        "{}{}",
        leading
            .text
            .strip_suffix(['-', '\u{2010}', '\u{00ad}'])
            .unwrap_or(&leading.text),
        trailing.text
    );
    let rect = leading.rect().union(&trailing.rect());
    let statistic = CharacterStatistic::compute(&characters);

    Word {
        characters,
        text,
        position: Position::new(leading.position.page, rect),
        is_hyphenated: trailing.is_hyphenated,
        is_dehyphenated: true,
        statistic,
    }
}
