use std::{fs, io, path, str};
use std::collections::HashSet;
use std::io::BufRead;
use flate2::bufread::GzDecoder;
use crate::sat::formula::Lit;
use crate::sat::{SolveRes, Solver};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Header {
    pub vars: usize,
    pub clauses: usize,
}


// Gzipped input is recognized by its magic bytes, not by the file name.
pub fn open_file<P: AsRef<path::Path>>(path: P) -> io::Result<Box<dyn io::Read>> {
    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let gzipped = reader.fill_buf()?.starts_with(&[0x1f, 0x8b]);
    if gzipped {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}


pub fn parse_file<P: AsRef<path::Path>, S: Solver>(path: P, solver: &mut S, validate: bool) -> io::Result<Header> {
    parse(&mut open_file(path)?, solver, validate)
}


// Feeds every clause of the stream to the solver. Variables declared in the
// header are created up front, so the model covers all of them.
pub fn parse<R: io::Read, S: Solver>(stream: &mut R, solver: &mut S, validate: bool) -> io::Result<Header> {
    let mut header = None;
    parse_dimacs(stream, validate, |item| {
        match item {
            Item::Header(h) => {
                while solver.n_vars() < h.vars {
                    solver.new_var();
                }
                header = Some(h);
            }

            Item::Clause(raw) => {
                let mut lits = Vec::with_capacity(raw.len());
                for lit_id in raw {
                    let lit = Lit::from_dimacs(lit_id)
                        .ok_or_else(|| parse_error(format!("literal {} is out of range", lit_id)))?;
                    while lit.var().to_dimacs() as usize > solver.n_vars() {
                        solver.new_var();
                    }
                    lits.push(lit);
                }
                solver.add_clause(&lits[..]);
            }
        }
        Ok(())
    })?;

    header.ok_or_else(|| parse_error("missing 'p cnf' header".to_string()))
}


// Model line: one signed DIMACS id per variable, separated by spaces.
pub fn write_model<W: io::Write>(stream: &mut W, model: &[Lit]) -> io::Result<()> {
    let mut first = true;
    for lit in model {
        if !first {
            write!(stream, " ")?;
        }
        write!(stream, "{}", lit.to_dimacs())?;
        first = false;
    }
    writeln!(stream)?;
    Ok(())
}


pub fn write_result<W: io::Write>(stream: &mut W, result: &SolveRes) -> io::Result<()> {
    match result {
        SolveRes::UnSAT(_) => writeln!(stream, "UNSAT"),
        SolveRes::Interrupted(_) => writeln!(stream, "INDETERMINATE"),
        SolveRes::SAT(model, _) => {
            writeln!(stream, "SAT")?;
            write_model(stream, &model[..])
        }
    }
}


pub fn validate_model_file<P: AsRef<path::Path>>(path: P, model: &[Lit]) -> io::Result<bool> {
    validate_model(&mut open_file(path)?, model)
}

// Checks that every clause of the stream has a literal made true by the model.
pub fn validate_model<R: io::Read>(stream: &mut R, model: &[Lit]) -> io::Result<bool> {
    let mut lits = HashSet::new();
    for lit in model {
        let lit_id = lit.to_dimacs();
        lits.insert(lit_id);
        if lits.contains(&(-lit_id)) {
            return Ok(false);
        }
    }

    let mut ok = true;
    parse_dimacs(stream, false, |item| {
        if let Item::Clause(cl) = item {
            if !cl.iter().any(|lit| lits.contains(lit)) {
                ok = false;
            }
        }
        Ok(())
    })?;

    Ok(ok)
}


fn parse_error(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("PARSE ERROR! {}", message))
}


enum Item {
    Header(Header),
    Clause(Vec<i32>),
}


fn parse_dimacs<R, F>(reader: &mut R, validate: bool, callback: F) -> io::Result<()>
where
    R: io::Read,
    F: FnMut(Item) -> io::Result<()>,
{
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    let mut p = DimacsParser {
        reader: buf.chars(),
        cur: None,
        max_var: 0,
        clauses: 0,
    };
    p.next();
    p.parse_me(validate, callback)
}


struct DimacsParser<'p> {
    reader: str::Chars<'p>,
    cur: Option<char>,
    max_var: usize,
    clauses: usize,
}

impl<'p> DimacsParser<'p> {
    fn parse_me<F: FnMut(Item) -> io::Result<()>>(&mut self, validate: bool, mut callback: F) -> io::Result<()> {
        enum State {
            Waiting,
            Parsing(Header),
        }

        let mut state = State::Waiting;
        loop {
            self.skip_whitespace();
            match state {
                State::Waiting => match self.current() {
                    Some('c') => self.skip_line(),
                    None => return Err(parse_error("missing 'p cnf' header".to_string())),
                    _ => {
                        self.consume("p")?;
                        self.consume_whitespace()?;
                        self.consume("cnf")?;
                        self.consume_whitespace()?;
                        let vars = self.next_uint()?;
                        let clauses = self.next_uint()?;
                        let h = Header { vars, clauses };
                        callback(Item::Header(h))?;
                        state = State::Parsing(h);
                    }
                },

                State::Parsing(h) => match self.current() {
                    Some('c') => self.skip_line(),

                    // SATLIB benchmarks end their clause list with a '%' line.
                    Some('%') | None => {
                        if validate {
                            if h.clauses != self.clauses {
                                return Err(parse_error(format!(
                                    "DIMACS header mismatch: {} clauses declared, {} found",
                                    h.clauses, self.clauses
                                )));
                            }

                            if h.vars < self.max_var {
                                return Err(parse_error(format!(
                                    "DIMACS header mismatch: {} vars declared, variable {} found",
                                    h.vars, self.max_var
                                )));
                            }
                        }
                        return Ok(());
                    }

                    _ => {
                        let c = self.parse_clause()?;
                        callback(Item::Clause(c))?;
                    }
                },
            }
        }
    }

    fn parse_clause(&mut self) -> io::Result<Vec<i32>> {
        let mut lits = Vec::new();
        loop {
            self.skip_whitespace();
            match self.cur {
                None => return Err(parse_error("clause is not terminated by 0".to_string())),
                Some('c') => {
                    self.skip_line();
                    continue;
                }
                _ => {}
            }

            let lit = self.next_int()?;
            if lit == 0 {
                self.clauses += 1;
                return Ok(lits);
            } else {
                self.max_var = self.max_var.max(lit.abs() as usize);
                lits.push(lit);
            }
        }
    }


    #[inline]
    fn next(&mut self) {
        self.cur = self.reader.next();
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.cur
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cur {
            if !c.is_whitespace() {
                break;
            }
            self.next();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.cur {
            self.next();
            if c == '\n' {
                break;
            }
        }
    }

    fn consume_whitespace(&mut self) -> io::Result<()> {
        match self.cur {
            Some(c) if c.is_whitespace() => {
                self.skip_whitespace();
                Ok(())
            }
            _ => Err(parse_error("failed to consume; expected whitespace".to_string())),
        }
    }

    fn consume(&mut self, target: &str) -> io::Result<()> {
        for tc in target.chars() {
            match self.cur {
                Some(c) if c == tc => self.next(),
                _ => {
                    return Err(parse_error(format!("failed to consume; expected '{}'", target)));
                }
            }
        }
        Ok(())
    }

    fn read_int_body(&mut self) -> io::Result<u64> {
        let mut len: usize = 0;
        let mut value: u64 = 0;
        loop {
            match self.cur.and_then(|c| c.to_digit(10)) {
                Some(d) => {
                    value = value * 10 + (d as u64);
                    if value > (i32::max_value() as u64) {
                        return Err(parse_error("integer is too large".to_string()));
                    }
                    len += 1;
                    self.next();
                }

                // A number must be followed by whitespace or the end of input.
                None if len > 0 && self.cur.map_or(true, char::is_whitespace) => return Ok(value),

                None => {
                    return Err(parse_error(match self.cur {
                        Some(c) => format!("int expected, found '{}'", c),
                        None => "int expected".to_string(),
                    }));
                }
            }
        }
    }

    fn next_int(&mut self) -> io::Result<i32> {
        self.skip_whitespace();
        let sign = match self.cur {
            Some('+') => {
                self.next();
                1
            }
            Some('-') => {
                self.next();
                -1
            }
            _ => 1,
        };

        let val = self.read_int_body()?;
        Ok(sign * (val as i32))
    }

    fn next_uint(&mut self) -> io::Result<usize> {
        self.skip_whitespace();
        if let Some('+') = self.cur {
            self.next();
        }
        self.read_int_body().map(|v| v as usize)
    }
}
