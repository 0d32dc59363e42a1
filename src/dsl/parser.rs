//! Parser for the scheme DSL.

use super::ast::Document;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{FitError, Result};
use crate::scheme::{Canvas, Element, Orientation, Point};
use crate::solver::Constraint;

/// Parser for scheme DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire description.
    pub fn parse(&mut self) -> Result<Document> {
        let mut doc = Document::new();

        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                // Skip empty lines
                TokenKind::Newline => {}
                TokenKind::Directive => self.parse_directive(&mut doc)?,
                TokenKind::Identifier => self.parse_statement(&mut doc)?,
                TokenKind::Number => {
                    return Err(FitError::parse(
                        self.current.line,
                        format!("unexpected number '{}' at start of line", self.current.text),
                    ));
                }
            }

            // Every statement ends at a newline or EOF
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(FitError::parse(
                        self.current.line,
                        format!("unexpected trailing token '{}'", self.current.text),
                    ));
                }
            }
        }

        Ok(doc)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_number(&mut self, what: &str) -> Result<f64> {
        if self.current.kind != TokenKind::Number {
            return Err(FitError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ));
        }
        let value = self.current.text.parse::<f64>().map_err(|_| {
            FitError::parse(self.current.line, format!("invalid number '{}'", self.current.text))
        })?;
        self.advance()?;
        Ok(value)
    }

    fn expect_point(&mut self) -> Result<Point> {
        let x = self.expect_number("x coordinate")?;
        let y = self.expect_number("y coordinate")?;
        Ok(Point::new(x, y))
    }

    fn parse_directive(&mut self, doc: &mut Document) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".canvas" => {
                let width = self.expect_number("canvas width")?;
                let height = self.expect_number("canvas height")?;
                doc.canvas = Some(Canvas::new(width, height));
            }
            ".margin" => {
                doc.margin = Some(self.expect_number("margin")?);
            }
            ".tolerance" => {
                let tolerance = self.expect_number("tolerance")?;
                if !(tolerance >= 0.0) {
                    return Err(FitError::parse(line, "tolerance must be non-negative"));
                }
                doc.tolerance = Some(tolerance);
            }
            ".max_scale" => {
                doc.max_scale = Some(self.expect_number("maximum scale")?);
            }
            _ => {
                return Err(FitError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_statement(&mut self, doc: &mut Document) -> Result<()> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match keyword.to_lowercase().as_str() {
            "constraint" | "c" => {
                let slope = self.expect_number("slope")?;
                let lower = self.expect_number("lower bound")?;
                let upper = self.expect_number("upper bound")?;
                doc.constraints.push(Constraint::new(slope, lower, upper));
            }
            "contact" => {
                let at = self.expect_point()?;
                doc.scheme.add(Element::Contact { at });
            }
            "ground" | "grounding" => {
                let at = self.expect_point()?;
                doc.scheme.add(Element::Grounding { at });
            }
            "node" => {
                let at = self.expect_point()?;
                doc.scheme.add(Element::Node { at });
            }
            "resistor" => {
                let at = self.expect_point()?;
                let orientation = self.parse_orientation()?;
                doc.scheme.add(Element::Resistor { at, orientation });
            }
            "wire" => {
                let mut points = Vec::new();
                while self.current.kind == TokenKind::Number {
                    points.push(self.expect_point()?);
                }
                if points.len() < 2 {
                    return Err(FitError::parse(line, "wire needs at least two points"));
                }
                doc.scheme.add(Element::Wire { points });
            }
            _ => {
                return Err(FitError::parse(
                    line,
                    format!("unknown statement: {}", keyword),
                ));
            }
        }

        Ok(())
    }

    fn parse_orientation(&mut self) -> Result<Orientation> {
        if self.current.kind != TokenKind::Identifier {
            return Ok(Orientation::default());
        }
        let orientation = match self.current.text.to_lowercase().as_str() {
            "horizontal" | "h" => Orientation::Horizontal,
            "vertical" | "v" => Orientation::Vertical,
            other => {
                return Err(FitError::parse(
                    self.current.line,
                    format!("unknown orientation '{}'", other),
                ));
            }
        };
        self.advance()?;
        Ok(orientation)
    }
}
