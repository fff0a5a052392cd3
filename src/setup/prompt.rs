//! 交互式确认

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// 提一个问题，读取一行回答
pub trait Prompt {
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// 从 stdin 读取回答
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

/// 预先给定回答，记录被问到的问题
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        // 回答用完等同于 EOF
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// 只有 `yes` / `y`（忽略大小写与首尾空白）算同意
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("yes\n"));
        assert!(is_affirmative("  Y "));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_scripted_prompt_records_questions() {
        let mut prompt = ScriptedPrompt::new(["y"]);

        assert_eq!(prompt.ask("first?").unwrap(), "y");
        assert_eq!(prompt.ask("second?").unwrap(), "");
        assert_eq!(prompt.asked, vec!["first?", "second?"]);
    }
}
