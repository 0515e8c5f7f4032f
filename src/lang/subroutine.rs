use super::{Error, SourceLine};
use std::collections::BTreeMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

const START: &str = "@start(";
const END: &str = "@end()";
const CALL: &str = "@call";
const FILE: &str = "<subroutine>";

/// Subroutine name to declared arity.
type Table = BTreeMap<String, usize>;

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The comma separated list between `(` and `)`.
fn arguments<'a>(line: &SourceLine, s: &'a str) -> Result<Vec<&'a str>> {
    let s = s.trim();
    if !s.starts_with('(') {
        return Err(error!(SyntaxError, line; "MISSING OPENING PARENTHESIS"));
    }
    if !s.ends_with(')') {
        return Err(error!(SyntaxError, line; "MISSING CLOSING PARENTHESIS"));
    }
    Ok(s[1..s.len() - 1].split(',').map(str::trim).collect())
}

fn parse_start(line: &SourceLine) -> Result<(String, usize)> {
    let contents = line.contents().trim();
    let parts = arguments(line, &contents[START.len() - 1..])?;
    if parts.len() != 2 {
        return Err(error!(SyntaxError, line; "@start TAKES A NAME AND AN ARITY"));
    }
    let name = parts[0];
    if !is_name(name) {
        return Err(error!(SyntaxError, line; "INVALID SUBROUTINE NAME: {}", name));
    }
    match parts[1].parse::<usize>() {
        Ok(arity) => Ok((name.to_string(), arity)),
        Err(_) => Err(error!(InvalidArgument, line; "INVALID ARITY: {}", parts[1])),
    }
}

fn collect(lines: &[SourceLine]) -> Result<Table> {
    let mut table = Table::new();
    for line in lines {
        if line.contents().trim().starts_with(START) {
            let (name, arity) = parse_start(line)?;
            if table.insert(name.clone(), arity).is_some() {
                return Err(error!(Redefinition, line; "SUBROUTINE {}", name));
            }
        }
    }
    Ok(table)
}

fn preamble(table: &Table) -> Vec<SourceLine> {
    let arity = table.values().copied().max().unwrap_or(0);
    let mut text = vec!["$return = [_]".to_string(), "$jump_back = [_]".to_string()];
    text.extend((0..arity).map(|i| format!("$arg{} = [_]", i)));
    text.iter()
        .enumerate()
        .map(|(index, s)| SourceLine::new(index + 1, FILE, s))
        .collect()
}

fn expand_call(line: &SourceLine, table: &Table, call: usize) -> Result<Vec<SourceLine>> {
    let contents = line.contents().trim();
    let parts = arguments(line, &contents[CALL.len()..])?;
    let name = parts[0];
    let args = &parts[1..];
    let arity = match table.get(name) {
        Some(arity) => *arity,
        None => return Err(error!(UnknownSubroutine, line; "{}", name)),
    };
    if args.len() != arity {
        return Err(error!(ArityMismatch, line; "EXPECTED {}, GOT {}", arity, args.len()));
    }
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(error!(SyntaxError, line; "EMPTY ARGUMENT"));
    }
    debug!(%name, call, "@call");
    let mut out: Vec<SourceLine> = args
        .iter()
        .enumerate()
        .map(|(i, arg)| line.with_contents(format!("MOV $arg{} {}", i, arg)))
        .collect();
    out.push(line.with_contents(format!("MOV $jump_back :ret{}", call)));
    out.push(line.with_contents(format!("JMP :{}", name)));
    out.push(line.with_contents(format!("ret{}:", call)));
    Ok(out)
}

/// Expands `@start(name, arity)`, `@end()` and `@call(name, args...)`.
///
/// Arguments travel through the shared cells `$arg0..`, the return
/// address through `$jump_back` and the result through `$return`.
pub fn expand_subroutines(lines: Vec<SourceLine>) -> Result<Vec<SourceLine>> {
    let table = collect(&lines)?;
    if table.is_empty() {
        if let Some(line) = lines.iter().find(|l| l.contents().contains(CALL)) {
            return Err(error!(UnknownSubroutine, line; "@call WITHOUT SUBROUTINE DEFINITION"));
        }
        if let Some(line) = lines.iter().find(|l| l.contents().trim().starts_with(END)) {
            return Err(error!(SyntaxError, line; "@end() WITHOUT @start"));
        }
        return Ok(lines);
    }
    debug!(count = table.len(), "subroutines found");

    let mut out = preamble(&table);
    let mut calls = 0;
    let mut open: Option<SourceLine> = None;
    for line in lines {
        let contents = line.contents().trim();
        if contents.starts_with(CALL) {
            out.append(&mut expand_call(&line, &table, calls)?);
            calls += 1;
        } else if contents.starts_with(START) {
            if open.is_some() {
                return Err(error!(SyntaxError, &line; "NESTED @start"));
            }
            let (name, _) = parse_start(&line)?;
            out.push(line.with_contents(format!("{}:", name)));
            out.push(line.with_contents("MOV $return 0"));
            open = Some(line);
        } else if contents.starts_with(END) {
            if open.take().is_none() {
                return Err(error!(SyntaxError, &line; "@end() WITHOUT @start"));
            }
            out.push(line.with_contents("JMP $jump_back"));
        } else {
            out.push(line);
        }
    }
    if let Some(line) = open {
        return Err(error!(SyntaxError, &line; "@start WITHOUT @end()"));
    }
    Ok(out)
}
