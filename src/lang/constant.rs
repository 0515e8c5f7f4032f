use super::{tokenize, Diagnostics, Error, SourceLine};
use crate::config::Config;
use std::collections::HashMap;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

const AUTO_MEMORY: &str = "[_]";

/// ## Constant table for one compilation

struct Constants {
    values: HashMap<String, String>,
    next_cell: usize,
    cells: usize,
}

impl Constants {
    fn new(config: &Config) -> Constants {
        Constants {
            values: HashMap::new(),
            next_cell: 0,
            cells: config.cells(),
        }
    }

    fn allocate(&mut self, line: &SourceLine) -> Result<String> {
        if self.next_cell >= self.cells {
            return Err(error!(OutOfMemory, line; "[_]: NO MEMORY LEFT"));
        }
        let cell = format!("[{}]", self.next_cell);
        self.next_cell += 1;
        Ok(cell)
    }

    fn lookup(&self, token: &str, line: &SourceLine) -> Result<String> {
        match self.values.get(&token[1..]) {
            Some(value) => Ok(value.clone()),
            None => Err(error!(NoSuchConstant, line; "{}", token)),
        }
    }

    fn define(
        &mut self,
        name: &str,
        value: &str,
        line: &SourceLine,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(error!(SyntaxError, line; "MISSING CONSTANT NAME"));
        }
        if self.values.contains_key(name) {
            diagnostics.warning(error!(ConstantRedefined, line; "${}", name))?;
        }
        let value = if value == AUTO_MEMORY {
            self.allocate(line)?
        } else if value.starts_with('$') {
            self.lookup(value, line)?
        } else {
            value.to_string()
        };
        debug!(%name, %value, "constant");
        self.values.insert(name.to_string(), value);
        Ok(())
    }
}

/// Consumes `$name = value` lines and replaces every later `$name`.
/// `[_]` assigns the next unused memory cell.
pub fn substitute_constants(
    lines: Vec<SourceLine>,
    config: &Config,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<SourceLine>> {
    let mut constants = Constants::new(config);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let tokens = tokenize(line.contents());
        if tokens.len() > 1 && tokens[0].starts_with('$') && tokens[1] == "=" {
            match tokens.len() {
                3 => constants.define(&tokens[0][1..], tokens[2], &line, diagnostics)?,
                2 => return Err(error!(SyntaxError, &line; "MISSING VALUE")),
                _ => return Err(error!(SyntaxError, &line; "UNEXPECTED {}", tokens[3])),
            }
            continue;
        }
        let mut replaced = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token.starts_with('$') {
                replaced.push(constants.lookup(token, &line)?);
            } else {
                replaced.push(token.to_string());
            }
        }
        let contents = replaced.join(" ");
        trace!(%contents);
        out.push(line.with_contents(contents));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Strict};

    fn substitute(text: &str, config: &Config) -> Result<Vec<String>> {
        let lines = SourceLine::from_text("<test>", text);
        let lines = substitute_constants(lines, config, &mut Strict)?;
        Ok(lines.iter().map(|l| l.contents().to_string()).collect())
    }

    fn pp(text: &str) -> Vec<String> {
        substitute(text, &Config::default()).unwrap()
    }

    #[test]
    fn test_substitution() {
        assert_eq!(pp("$a = 5\nMOV $a 3"), vec!["MOV 5 3"]);
        assert_eq!(pp("$a = 5\nMOV 3 $a"), vec!["MOV 3 5"]);
        assert_eq!(pp("$a = [5]\nJeq 6 $a [1]"), vec!["Jeq 6 [5] [1]"]);
        assert_eq!(pp("$a = 5\n$b = $a\nMOV [0] $b"), vec!["MOV [0] 5"]);
    }

    #[test]
    fn test_auto_memory() {
        assert_eq!(pp("$a = [_]\nMOV $a 1"), vec!["MOV [0] 1"]);
        assert_eq!(
            pp("$a = [_]\n$b = [_]\nMOV $b $a"),
            vec!["MOV [1] [0]"]
        );
    }

    #[test]
    fn test_auto_memory_bound() {
        let config = Config::default().memory_size(4);
        let exact: Vec<String> = (0..4).map(|i| format!("$c{} = [_]", i)).collect();
        let mut text = exact.join("\n");
        text.push_str("\nMOV $c3 $c0");
        assert_eq!(substitute(&text, &config).unwrap(), vec!["MOV [3] [0]"]);
        text.push_str("\n$c4 = [_]");
        let e = substitute(&text, &config).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
    }

    #[test]
    fn test_redefinition_warns() {
        let e = substitute("$a = 1\n$a = 1\nHALT", &Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ConstantRedefined);

        let mut warnings: Vec<Error> = vec![];
        let lines = SourceLine::from_text("<test>", "$a = 1\n$a = 2\nDPRINT $a");
        let lines = substitute_constants(lines, &Config::default(), &mut warnings).unwrap();
        assert_eq!(lines[0].contents(), "DPRINT 2");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line().map(|l| l.number()), Some(2));
    }

    #[test]
    fn test_no_such_constant() {
        let e = substitute("MOV $a 1", &Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::NoSuchConstant);
        assert_eq!(e.text(), "$a");
    }

    #[test]
    fn test_malformed_assignment() {
        let e = substitute("$a =", &Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        let e = substitute("$a = 1 2", &Config::default()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }
}
