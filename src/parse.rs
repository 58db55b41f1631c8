use crate::error::GenerateError;
use crate::lexer::{split_insertion, Tokens};
use crate::types::{FormatSpecifier, Insertion, MessageDeclaration};
use logos::{Logos, Span};
use std::path::Path;
use tracing::{debug, warn};

const MESSAGE_ID: &str = "MessageId=";
const EXCEPTION_NAME: &str = ";//ExceptionName=";
const SYMBOLIC_NAME: &str = "SymbolicName=";
const IGNORED_DIRECTIVES: &[&str] = &["Severity=", "Facility=", "OutputBase=", "Language="];

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Scanning,
    InBlock,
    InBody,
}

/// Accumulates one `MessageId=` block until its terminating `.` line.
#[derive(Debug, Default)]
struct Block {
    start_line: usize,
    symbolic_name: String,
    type_name: String,
    argument_names: Vec<String>,
    body: String,
    body_line: usize,
}

impl Block {
    fn new(start_line: usize) -> Self {
        Self {
            start_line,
            ..Default::default()
        }
    }
}

#[inline]
fn strip_prefix_ignore_case<'l>(line: &'l str, prefix: &str) -> Option<&'l str> {
    line.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &line[prefix.len()..])
}

#[inline]
fn character_columns(text: &str, line_start: usize, span: &Span) -> (usize, usize) {
    let start = text[line_start..span.start].chars().count();
    (start, start + text[span.start..span.end].chars().count())
}

pub(crate) struct Parser<'s> {
    source: &'s str,
    wide_char_mode: bool,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str, wide_char_mode: bool) -> Self {
        Self {
            source: source.strip_prefix('\u{feff}').unwrap_or(source),
            wide_char_mode,
        }
    }

    fn make_chic_error_for_malformed_insertion(
        &self,
        block: &Block,
        text: &str,
        span: &Span,
        specifier: &str,
    ) -> GenerateError {
        let line_offset = text[..span.start].matches('\n').count();
        let line_start = text[..span.start].rfind('\n').map_or(0, |newline| newline + 1);
        let line_end = text[span.start..]
            .find('\n')
            .map_or(text.len(), |newline| span.start + newline);
        let line = block.body_line + line_offset;

        let message = format!("Unrecognized format specifier '{specifier}'");
        let help = format!(
            "Specifiers can be any of: {}",
            FormatSpecifier::all()
                .iter()
                .map(|v| v.to_literal())
                .collect::<Vec<_>>()
                .join(", ")
        );

        // chic counts columns in characters, not bytes
        let (start, end) = character_columns(text, line_start, span);

        let report = chic::Error::new("Malformed insertion")
            .error(
                line,
                start,
                end,
                &text[line_start..line_end],
                message.as_str(),
            )
            .help(help.as_str())
            .to_string();

        GenerateError::MalformedInsertion {
            specifier: specifier.to_string(),
            line,
            report,
        }
    }

    /// Resolves the placeholders of `text` into one insertion per position,
    /// back-filling skipped indices with string insertions.
    fn resolve_insertions(
        &self,
        block: &Block,
        text: &str,
    ) -> Result<Vec<Insertion>, GenerateError> {
        let mut insertions: Vec<Insertion> = Vec::new();
        let mut fillers: Vec<bool> = Vec::new();
        let mut last_position = 0;

        for (token, span) in Tokens::lexer(text).spanned() {
            if !matches!(token, Ok(Tokens::Insertion)) {
                continue;
            }

            let (index, literal) = split_insertion(&text[span.clone()]);
            let specifier = match literal {
                Some(literal) => FormatSpecifier::from_literal(literal).ok_or_else(|| {
                    self.make_chic_error_for_malformed_insertion(block, text, &span, literal)
                })?,
                None => FormatSpecifier::DEFAULT,
            };

            let name = block
                .argument_names
                .get(index - 1)
                .filter(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| Insertion::synthesized_name(index));
            let insertion = Insertion::new(specifier.resolve(self.wide_char_mode), name);

            // A later reference to a back-filled position takes it over.
            if index <= last_position {
                if std::mem::replace(&mut fillers[index - 1], false) {
                    insertions[index - 1] = insertion;
                } else {
                    warn!(
                        symbolic_name = %block.symbolic_name,
                        index,
                        "insertion index referenced again, keeping its first type"
                    );
                }
                continue;
            }

            while index > last_position + 1 {
                last_position += 1;
                insertions.push(Insertion::new(
                    FormatSpecifier::DEFAULT.resolve(self.wide_char_mode),
                    Insertion::synthesized_name(last_position),
                ));
                fillers.push(true);
            }

            insertions.push(insertion);
            fillers.push(false);
            last_position = index;
        }

        Ok(insertions)
    }

    fn finish_block(&self, block: Block) -> Result<Option<MessageDeclaration>, GenerateError> {
        let message_text = block.body.trim_end();

        if block.type_name.is_empty() || block.symbolic_name.is_empty() || message_text.is_empty()
        {
            debug!(
                line = block.start_line,
                symbolic_name = %block.symbolic_name,
                type_name = %block.type_name,
                "dropping incomplete message declaration"
            );
            return Ok(None);
        }

        let insertions = self.resolve_insertions(&block, message_text)?;

        let declaration = MessageDeclaration {
            message_text: message_text.to_string(),
            symbolic_name: block.symbolic_name,
            type_name: block.type_name,
            insertions,
        };

        debug!(
            type_name = %declaration.type_name,
            insertions = declaration.insertions.len(),
            "parsed message declaration"
        );

        Ok(Some(declaration))
    }

    fn parse_directive(&self, block: &mut Block, line: &str, number: usize) -> State {
        let trimmed = line.trim();

        if let Some(value) = strip_prefix_ignore_case(trimmed, EXCEPTION_NAME) {
            let mut parts = value.split(',').map(str::trim);
            block.type_name = parts.next().unwrap_or_default().to_string();
            block.argument_names = parts.map(String::from).collect();
            State::InBlock
        } else if let Some(value) = strip_prefix_ignore_case(trimmed, SYMBOLIC_NAME) {
            block.symbolic_name = value.trim().to_string();
            State::InBlock
        } else if IGNORED_DIRECTIVES
            .iter()
            .any(|directive| strip_prefix_ignore_case(trimmed, directive).is_some())
        {
            State::InBlock
        } else {
            block.body.push_str(line.trim_start());
            block.body_line = number;
            State::InBody
        }
    }

    pub fn parse(&self) -> Result<Vec<MessageDeclaration>, GenerateError> {
        let mut declarations = Vec::new();
        let mut state = State::Scanning;
        let mut block = Block::default();

        for (number, line) in self.source.lines().enumerate() {
            let number = number + 1;
            let trimmed = line.trim();

            state = match state {
                State::Scanning => {
                    if strip_prefix_ignore_case(trimmed, MESSAGE_ID).is_some() {
                        block = Block::new(number);
                        State::InBlock
                    } else {
                        State::Scanning
                    }
                }
                State::InBlock | State::InBody if trimmed.starts_with('.') => {
                    if let Some(declaration) = self.finish_block(std::mem::take(&mut block))? {
                        declarations.push(declaration);
                    }
                    State::Scanning
                }
                State::InBlock => self.parse_directive(&mut block, line, number),
                State::InBody => {
                    block.body.push('\n');
                    block.body.push_str(line);
                    State::InBody
                }
            };
        }

        if state != State::Scanning {
            warn!(
                line = block.start_line,
                symbolic_name = %block.symbolic_name,
                "dropping message declaration without a terminating '.' line"
            );
        }

        Ok(declarations)
    }
}

/// Reads and parses the message file at `path`.
pub(crate) fn load(
    path: &Path,
    wide_char_mode: bool,
) -> Result<Vec<MessageDeclaration>, GenerateError> {
    let source = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Parser::new(&source, wide_char_mode).parse()
}
