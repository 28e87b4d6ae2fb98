//! Display and input.

use cl_ir::{DisplayItem, Expr, Primitive};

use super::Interpreter;
use crate::errors::{
    input_closed, invalid_element, letter_input_length, numeric_input_required, EvalResult,
};
use crate::value::Value;

/// How a scalar input is coerced, decided by the value currently stored.
#[derive(Copy, Clone)]
enum InputShape {
    Number,
    Letter,
    Text,
}

impl Interpreter {
    /// Write the items joined by single spaces.
    pub(crate) fn exec_display(&mut self, items: &[DisplayItem], newline: bool) -> EvalResult<()> {
        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            parts.push(self.display_text(item)?);
        }
        let text = parts.join(" ");
        if newline {
            self.console.println(&text);
        } else {
            self.console.print(&text);
        }
        Ok(())
    }

    fn display_text(&mut self, item: &DisplayItem) -> EvalResult<String> {
        match item {
            DisplayItem::Expr(expr) => Ok(self.eval_expr(expr)?.to_string()),
            DisplayItem::Variable(name) => Ok(self.store.get(name)?.to_string()),
            DisplayItem::Literal(raw) => Ok(unquote(raw).to_string()),
        }
    }

    /// `INPUT(x)`.
    ///
    /// A NUMBER-shaped value needs a numeral and a LETTER-shaped one a
    /// single character; otherwise a warning is reported and the value is
    /// kept. Anything else stores the line as a SENTENCE.
    pub(crate) fn exec_input(&mut self, name: &str) -> EvalResult<()> {
        let shape = match self.store.get(name)? {
            Value::Number(_) => InputShape::Number,
            Value::Letter(_) => InputShape::Letter,
            _ => InputShape::Text,
        };
        let line = self.read_input(&format!("Enter value for {name}: "))?;

        match shape {
            InputShape::Number => match parse_number(&line) {
                Some(n) => self.store.put(name, Value::Number(n))?,
                None => self.input_warning(&format!(
                    "Error: Numeric input required for NUMBER variable '{name}'."
                )),
            },
            InputShape::Letter => match single_char(&line) {
                Some(c) => self.store.put(name, Value::Letter(c))?,
                None => self.input_warning("LETTER input must be a single character."),
            },
            InputShape::Text => self.store.put(name, Value::Sentence(line))?,
        }
        Ok(())
    }

    /// `INPUT(xs[i])`. The element type decides the coercion, and a line
    /// that does not fit is a runtime failure.
    pub(crate) fn exec_element_input(&mut self, name: &str, index: &Expr) -> EvalResult<()> {
        let index = self.eval_expr(index)?.as_number()?;
        let array = self.store.array(name)?;
        let elem = array.elem();
        array.get(index)?;

        let line = self.read_input(&format!("Enter value for {name}[{index}]: "))?;
        let value = match elem {
            Primitive::Number => parse_number(&line)
                .map(Value::Number)
                .ok_or_else(numeric_input_required)?,
            Primitive::Letter => single_char(&line)
                .map(Value::Letter)
                .ok_or_else(letter_input_length)?,
            Primitive::Logic => parse_logic(&line)
                .map(Value::Logic)
                .ok_or_else(|| invalid_element(Primitive::Logic, line.trim()))?,
            Primitive::Sentence => Value::Sentence(line),
        };
        self.store.array_mut(name)?.set(index, value)
    }

    fn read_input(&self, prompt: &str) -> EvalResult<String> {
        if self.config.prompts {
            self.console.print(prompt);
        }
        self.console.read_line().ok_or_else(input_closed)
    }

    fn input_warning(&self, message: &str) {
        tracing::warn!(warning = message, "input rejected");
        if self.config.warnings {
            self.console.warn(message);
        }
    }
}

fn parse_number(line: &str) -> Option<f64> {
    line.trim().parse().ok()
}

fn single_char(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_logic(line: &str) -> Option<bool> {
    match line.trim() {
        text if text.eq_ignore_ascii_case("true") => Some(true),
        text if text.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(raw: &str) -> &str {
    let text = raw.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_strips_one_matching_pair() {
        assert_eq!(unquote("\"hello\""), "hello");
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\"mixed'"), "\"mixed'");
    }

    #[test]
    fn input_parsers() {
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("four"), None);
        assert_eq!(single_char("x"), Some('x'));
        assert_eq!(single_char("xy"), None);
        assert_eq!(single_char(""), None);
        assert_eq!(parse_logic("TRUE"), Some(true));
        assert_eq!(parse_logic("no"), None);
    }
}
