use std::io::{BufRead, Write};

use twentyone::{Move, TableEventHandler};

/// Interactive terminal front end for the round engine. Raw-input retries
/// (garbage where a number or h/s/y/n is expected) are handled here; bet
/// range validation stays in the engine, which re-requests through this
/// handler.
pub struct ConsoleHandler<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleHandler<R, W> {
    pub fn new(input: R, output: W) -> ConsoleHandler<R, W> {
        ConsoleHandler { input, output }
    }

    fn prompt(&mut self, text: &str) -> String {
        write!(self.output, "{}", text).expect("console write failed");
        self.output.flush().expect("console flush failed");
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line).expect("console read failed");
        if bytes == 0 {
            panic!("console input closed");
        }
        line.trim().to_lowercase()
    }
}

impl<R: BufRead, W: Write> TableEventHandler for ConsoleHandler<R, W> {
    fn request_bet(&mut self, max_chips: u32) -> u32 {
        loop {
            let line = self.prompt(&format!(
                "How many chips will you bet? [Remaining: {}]> ",
                max_chips
            ));
            if let Ok(bet) = line.parse::<u32>() {
                return bet;
            }
        }
    }

    fn request_move(&mut self) -> Move {
        loop {
            let line = self.prompt("Your next move [(h)it | (s)tand]> ");
            if line.starts_with('h') {
                return Move::Hit;
            }
            if line.starts_with('s') {
                return Move::Stand;
            }
        }
    }

    fn request_continue(&mut self) -> bool {
        loop {
            let line = self.prompt("Play once again? [(y)es | (n)o]> ");
            if line.starts_with('y') {
                return true;
            }
            if line.starts_with('n') {
                return false;
            }
        }
    }

    fn notify(&mut self, message: &str) {
        writeln!(self.output, "{}", message).expect("console write failed");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn keeps_prompting_until_the_bet_parses() {
        let input = Cursor::new("ten\n-3\n25\n");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);

        assert_eq!(handler.request_bet(100), 25);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("How many chips").count(), 3);
        assert!(transcript.contains("[Remaining: 100]"));
    }

    #[test]
    fn accepts_move_prefixes_in_any_case() {
        let input = Cursor::new("x\nHIT\n");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);
        assert_eq!(handler.request_move(), Move::Hit);

        let input = Cursor::new("s\n");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);
        assert_eq!(handler.request_move(), Move::Stand);
    }

    #[test]
    fn continue_answers_reduce_to_yes_or_no() {
        let input = Cursor::new("maybe\nyes\n");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);
        assert!(handler.request_continue());

        let input = Cursor::new("N\n");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);
        assert!(!handler.request_continue());
    }

    #[test]
    fn notifications_end_with_a_newline() {
        let input = Cursor::new("");
        let mut output = Vec::new();
        let mut handler = ConsoleHandler::new(input, &mut output);
        handler.notify("Game starts!");
        assert_eq!(output, b"Game starts!\n");
    }
}
