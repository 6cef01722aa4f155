use serde::{Deserialize, Serialize};

/// Marker glyph requested by a move code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoveSymbol {
    Cross,
    Ring,
}

/// A decoded player move: which symbol to draw in which grid cell.
///
/// Cells are addressed by the lattice index of their top-left corner
/// (row-major over the 4×4 corner lattice). An action is ephemeral: decoded
/// from a move code, consumed by the renderer, never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub symbol: MoveSymbol,
    pub cell: usize,
}

/// Errors for malformed move codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ActionDecodeError {
    #[error("move code must be exactly 3 characters, got {len}")]
    InvalidLength { len: usize },
    #[error("unknown symbol character {0:?} (expected 'C' or 'R')")]
    InvalidSymbol(char),
    #[error("unknown band character {0:?} (expected 'A', 'B' or 'C')")]
    InvalidBand(char),
    #[error("expected a decimal digit, got {0:?}")]
    InvalidDigit(char),
}

impl Action {
    /// Decode a 3-character move code such as `"CB2"`.
    ///
    /// Position 0 selects the symbol (`'C'` cross, `'R'` ring), position 1
    /// the band offset (`'A'` → 0, `'B'` → 4, `'C'` → 8) and position 2 the
    /// cell within the band. Decoding has no side effects; a caller holding
    /// a batch of codes decides whether a bad code aborts the batch or is
    /// skipped.
    pub fn decode(code: &str) -> Result<Self, ActionDecodeError> {
        let mut chars = code.chars();
        let (Some(symbol), Some(band), Some(digit), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(ActionDecodeError::InvalidLength {
                len: code.chars().count(),
            });
        };

        let symbol = match symbol {
            'C' => MoveSymbol::Cross,
            'R' => MoveSymbol::Ring,
            other => return Err(ActionDecodeError::InvalidSymbol(other)),
        };
        let offset = match band {
            'A' => 0,
            'B' => 4,
            'C' => 8,
            other => return Err(ActionDecodeError::InvalidBand(other)),
        };
        let digit = digit
            .to_digit(10)
            .ok_or(ActionDecodeError::InvalidDigit(digit))? as usize;

        Ok(Self {
            symbol,
            cell: offset + digit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_symbol_band_and_digit() {
        assert_eq!(
            Action::decode("CB2"),
            Ok(Action {
                symbol: MoveSymbol::Cross,
                cell: 6
            })
        );
        assert_eq!(
            Action::decode("RA0"),
            Ok(Action {
                symbol: MoveSymbol::Ring,
                cell: 0
            })
        );
        assert_eq!(
            Action::decode("RC2"),
            Ok(Action {
                symbol: MoveSymbol::Ring,
                cell: 10
            })
        );
    }

    #[test]
    fn rejects_each_malformed_position() {
        assert_eq!(
            Action::decode("XA0"),
            Err(ActionDecodeError::InvalidSymbol('X'))
        );
        assert_eq!(
            Action::decode("CD0"),
            Err(ActionDecodeError::InvalidBand('D'))
        );
        assert_eq!(
            Action::decode("CBx"),
            Err(ActionDecodeError::InvalidDigit('x'))
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            Action::decode(""),
            Err(ActionDecodeError::InvalidLength { len: 0 })
        );
        assert_eq!(
            Action::decode("CB"),
            Err(ActionDecodeError::InvalidLength { len: 2 })
        );
        assert_eq!(
            Action::decode("CB22"),
            Err(ActionDecodeError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn positions_are_checked_left_to_right() {
        // A bad symbol wins over a bad band or digit.
        assert_eq!(
            Action::decode("XYZ"),
            Err(ActionDecodeError::InvalidSymbol('X'))
        );
        assert_eq!(
            Action::decode("CXZ"),
            Err(ActionDecodeError::InvalidBand('X'))
        );
    }
}
