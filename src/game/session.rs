//! Player session state
//!
//! A session owns one puzzle and the chain of words the player has built from
//! its start word. The chain never loses its start word.

use super::rules::check_move;
use crate::core::Word;
use crate::error::MoveError;
use crate::puzzle::Puzzle;
use crate::wordlists::Dictionary;
use log::debug;

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was added; the target is not reached yet
    Continue,
    /// The word was the target
    Solved,
}

/// One game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle: Puzzle,
    chain: Vec<Word>,
    won: bool,
}

impl Session {
    /// Start a game; the chain begins with the puzzle's start word
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let chain = vec![puzzle.start().clone()];
        Self {
            puzzle,
            chain,
            won: false,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Words played so far, starting with the start word
    #[must_use]
    pub fn chain(&self) -> &[Word] {
        &self.chain
    }

    /// Last word of the chain
    #[must_use]
    pub fn current(&self) -> &Word {
        self.chain.last().unwrap_or_else(|| self.puzzle.start())
    }

    /// Moves made so far
    #[must_use]
    pub fn moves(&self) -> usize {
        self.chain.len() - 1
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Submit the next word
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the puzzle is solved
    /// - [`MoveError::NotAWord`] / [`MoveError::NotOneLetterApart`] for an
    ///   illegal move; the chain is left unchanged
    pub fn submit(
        &mut self,
        input: &str,
        dictionary: &Dictionary,
    ) -> Result<SubmitOutcome, MoveError> {
        if self.won {
            return Err(MoveError::GameOver);
        }

        check_move(input, self.current().text(), dictionary)?;

        // Raw dictionary entries may hold punctuation that no chain word can
        let word = Word::new(input.trim())
            .map_err(|_| MoveError::NotAWord(input.trim().to_lowercase()))?;
        debug!("{} -> {word}", self.current());
        self.chain.push(word);

        if self.current() == self.puzzle.target() {
            self.won = true;
            debug!("Solved {} in {} moves", self.puzzle, self.moves());
            return Ok(SubmitOutcome::Solved);
        }
        Ok(SubmitOutcome::Continue)
    }

    /// Remove the last played word
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the puzzle is solved
    /// - [`MoveError::NothingToUndo`] when only the start word remains
    pub fn undo(&mut self) -> Result<Word, MoveError> {
        if self.won {
            return Err(MoveError::GameOver);
        }
        if self.chain.len() <= 1 {
            return Err(MoveError::NothingToUndo);
        }
        self.chain.pop().ok_or(MoveError::NothingToUndo)
    }

    /// Shareable summary of a game
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "{} -> {}\n{} moves",
            self.puzzle.start(),
            self.puzzle.target(),
            self.moves()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn session() -> (Session, Dictionary) {
        let puzzle = Puzzle::from_path(words(&["cat", "cot", "cog"])).unwrap();
        let dictionary = Dictionary::from_words(&["cat", "cot", "cog", "dog", "dot", "cut"]);
        (Session::new(puzzle), dictionary)
    }

    #[test]
    fn starts_with_start_word() {
        let (session, _) = session();
        assert_eq!(session.chain(), words(&["cat"]).as_slice());
        assert_eq!(session.current().text(), "cat");
        assert_eq!(session.moves(), 0);
        assert!(!session.is_won());
    }

    #[test]
    fn solving_the_puzzle() {
        let (mut session, dict) = session();
        assert_eq!(session.submit("cot", &dict), Ok(SubmitOutcome::Continue));
        assert_eq!(session.submit("COG", &dict), Ok(SubmitOutcome::Solved));
        assert!(session.is_won());
        assert_eq!(session.moves(), 2);
        assert_eq!(session.share_text(), "cat -> cog\n2 moves");
    }

    #[test]
    fn longer_routes_are_allowed() {
        let (mut session, dict) = session();
        for word in ["cut", "cot", "dot", "dog"] {
            assert_eq!(session.submit(word, &dict), Ok(SubmitOutcome::Continue));
        }
        assert_eq!(session.submit("cog", &dict), Ok(SubmitOutcome::Solved));
        assert_eq!(session.moves(), 5);
    }

    #[test]
    fn illegal_moves_leave_chain_unchanged() {
        let (mut session, dict) = session();
        assert_eq!(
            session.submit("cab", &dict),
            Err(MoveError::NotAWord("cab".to_string()))
        );
        assert!(matches!(
            session.submit("dog", &dict),
            Err(MoveError::NotOneLetterApart { .. })
        ));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn undo_keeps_start_word() {
        let (mut session, dict) = session();
        assert_eq!(session.undo(), Err(MoveError::NothingToUndo));

        session.submit("cot", &dict).unwrap();
        assert_eq!(session.undo().unwrap().text(), "cot");
        assert_eq!(session.current().text(), "cat");
        assert_eq!(session.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn game_over_after_win() {
        let (mut session, dict) = session();
        session.submit("cot", &dict).unwrap();
        session.submit("cog", &dict).unwrap();
        assert_eq!(session.submit("dog", &dict), Err(MoveError::GameOver));
        assert_eq!(session.undo(), Err(MoveError::GameOver));
    }
}
