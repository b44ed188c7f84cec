//! Two-column pairing board shared by the letter and colour matching games.
//!
//! Each tile carries a tag; a pair is one tile from each column with equal
//! tags. The board owns the selection and the match counter, so a round's
//! progress lives in one value instead of in event-handler captures.

use crate::catalog::ItemColor;
use crate::game_registry::GameId;

/// Which column of the board a tile sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Position of a tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    pub column: Column,
    pub index: usize,
}

impl TileRef {
    pub fn new(column: Column, index: usize) -> Self {
        Self { column, index }
    }
}

/// What a tile shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileFace {
    Letter(char),
    Pictogram(String),
    Swatch(ItemColor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub tag: String,
    pub face: TileFace,
    /// Name shown in the hover tooltip, if any.
    pub name: Option<String>,
    pub matched: bool,
    pub shaking: bool,
}

impl Tile {
    pub fn new(tag: impl Into<String>, face: TileFace, name: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            face,
            name,
            matched: false,
            shaking: false,
        }
    }
}

/// Which columns may begin a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Only left tiles start a selection; right tiles complete it.
    LeftFirst,
    /// Either column starts a selection; the other completes it.
    EitherColumn,
}

impl SelectionRule {
    fn may_start(self, column: Column) -> bool {
        match self {
            Self::LeftFirst => column == Column::Left,
            Self::EitherColumn => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Nothing,
    Tile(TileRef),
}

/// Result of clicking a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Out-of-range tile, matched tile, or a click the rule does not allow.
    Ignored,
    Selected(TileRef),
    Matched { pair: [TileRef; 2], complete: bool },
    Mismatched { pair: [TileRef; 2] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBoard {
    left: Vec<Tile>,
    right: Vec<Tile>,
    rule: SelectionRule,
    selection: Selection,
    matches_found: usize,
}

impl MatchBoard {
    pub fn new(left: Vec<Tile>, right: Vec<Tile>, rule: SelectionRule) -> Self {
        Self {
            left,
            right,
            rule,
            selection: Selection::Nothing,
            matches_found: 0,
        }
    }

    pub fn column(&self, column: Column) -> &[Tile] {
        match column {
            Column::Left => &self.left,
            Column::Right => &self.right,
        }
    }

    pub fn tile(&self, at: TileRef) -> Option<&Tile> {
        self.column(at.column).get(at.index)
    }

    fn tile_mut(&mut self, at: TileRef) -> Option<&mut Tile> {
        match at.column {
            Column::Left => self.left.get_mut(at.index),
            Column::Right => self.right.get_mut(at.index),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selected(&self, at: TileRef) -> bool {
        self.selection == Selection::Tile(at)
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    /// Pairs needed to finish the board.
    pub fn total_pairs(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    pub fn is_complete(&self) -> bool {
        self.matches_found == self.total_pairs()
    }

    /// Apply a click on `target`.
    pub fn pick(&mut self, target: TileRef) -> PickOutcome {
        match self.tile(target) {
            Some(tile) if !tile.matched => {},
            _ => return PickOutcome::Ignored,
        }

        let current = match self.selection {
            Selection::Tile(current) if target.column == current.column.other() => current,
            _ => {
                if !self.rule.may_start(target.column) {
                    return PickOutcome::Ignored;
                }
                self.selection = Selection::Tile(target);
                return PickOutcome::Selected(target);
            },
        };

        self.selection = Selection::Nothing;
        let pair = [current, target];
        let same_tag = self.tile(current).map(|t| &t.tag) == self.tile(target).map(|t| &t.tag);
        if same_tag {
            for at in pair {
                if let Some(tile) = self.tile_mut(at) {
                    tile.matched = true;
                    tile.shaking = false;
                }
            }
            self.matches_found += 1;
            PickOutcome::Matched {
                pair,
                complete: self.is_complete(),
            }
        } else {
            for at in pair {
                if let Some(tile) = self.tile_mut(at) {
                    tile.shaking = true;
                }
            }
            PickOutcome::Mismatched { pair }
        }
    }

    /// Stop the shake animation on the given tiles.
    pub fn clear_shake(&mut self, tiles: &[TileRef]) {
        for &at in tiles {
            if let Some(tile) = self.tile_mut(at) {
                tile.shaking = false;
            }
        }
    }
}

/// A matching round: a prompt over a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRound {
    pub game: GameId,
    pub prompt: String,
    pub board: MatchBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(tag: char) -> Tile {
        Tile::new(tag.to_string(), TileFace::Letter(tag), None)
    }

    fn picture(tag: char, name: &str) -> Tile {
        Tile::new(
            tag.to_string(),
            TileFace::Pictogram("*".into()),
            Some(name.into()),
        )
    }

    /// Left: a b, right: b a.
    fn board(rule: SelectionRule) -> MatchBoard {
        MatchBoard::new(
            vec![letter('a'), letter('b')],
            vec![picture('b', "bee"), picture('a', "ant")],
            rule,
        )
    }

    const L0: TileRef = TileRef {
        column: Column::Left,
        index: 0,
    };
    const L1: TileRef = TileRef {
        column: Column::Left,
        index: 1,
    };
    const R0: TileRef = TileRef {
        column: Column::Right,
        index: 0,
    };
    const R1: TileRef = TileRef {
        column: Column::Right,
        index: 1,
    };

    #[test]
    fn right_click_without_selection_is_noop_for_letters() {
        let mut b = board(SelectionRule::LeftFirst);
        assert_eq!(b.pick(R0), PickOutcome::Ignored);
        assert_eq!(b.selection(), Selection::Nothing);
    }

    #[test]
    fn selecting_another_letter_replaces_selection() {
        let mut b = board(SelectionRule::LeftFirst);
        assert_eq!(b.pick(L0), PickOutcome::Selected(L0));
        assert_eq!(b.pick(L1), PickOutcome::Selected(L1));
        assert!(b.is_selected(L1));
        assert!(!b.is_selected(L0));
    }

    #[test]
    fn matching_pair_marks_both_tiles() {
        let mut b = board(SelectionRule::LeftFirst);
        b.pick(L0);
        assert_eq!(
            b.pick(R1),
            PickOutcome::Matched {
                pair: [L0, R1],
                complete: false
            }
        );
        assert!(b.tile(L0).unwrap().matched);
        assert!(b.tile(R1).unwrap().matched);
        assert_eq!(b.matches_found(), 1);
        assert_eq!(b.selection(), Selection::Nothing);
    }

    #[test]
    fn matched_tiles_ignore_clicks() {
        let mut b = board(SelectionRule::LeftFirst);
        b.pick(L0);
        b.pick(R1);
        assert_eq!(b.pick(L0), PickOutcome::Ignored);
        b.pick(L1);
        assert_eq!(b.pick(R1), PickOutcome::Ignored);
        assert!(b.is_selected(L1));
    }

    #[test]
    fn mismatch_shakes_and_clears_selection() {
        let mut b = board(SelectionRule::LeftFirst);
        b.pick(L0);
        assert_eq!(b.pick(R0), PickOutcome::Mismatched { pair: [L0, R0] });
        assert!(b.tile(L0).unwrap().shaking);
        assert!(b.tile(R0).unwrap().shaking);
        assert_eq!(b.selection(), Selection::Nothing);
        assert_eq!(b.matches_found(), 0);

        b.clear_shake(&[L0, R0]);
        assert!(!b.tile(L0).unwrap().shaking);
        assert!(!b.tile(R0).unwrap().shaking);
    }

    #[test]
    fn completes_after_last_pair() {
        let mut b = board(SelectionRule::LeftFirst);
        b.pick(L0);
        b.pick(R1);
        b.pick(L1);
        assert_eq!(
            b.pick(R0),
            PickOutcome::Matched {
                pair: [L1, R0],
                complete: true
            }
        );
        assert!(b.is_complete());
    }

    #[test]
    fn either_column_rule_is_symmetric() {
        let mut b = board(SelectionRule::EitherColumn);
        assert_eq!(b.pick(R0), PickOutcome::Selected(R0));
        assert_eq!(b.pick(R1), PickOutcome::Selected(R1));
        assert_eq!(
            b.pick(L0),
            PickOutcome::Matched {
                pair: [R1, L0],
                complete: false
            }
        );
    }

    #[test]
    fn only_the_opposite_column_completes_a_pair() {
        let mut b = board(SelectionRule::EitherColumn);
        b.pick(L0);
        assert_eq!(b.pick(L1), PickOutcome::Selected(L1));
        assert_eq!(b.matches_found(), 0);
        assert_eq!(
            b.pick(R0),
            PickOutcome::Matched {
                pair: [L1, R0],
                complete: false
            }
        );
    }

    #[test]
    fn out_of_range_tile_is_ignored() {
        let mut b = board(SelectionRule::EitherColumn);
        assert_eq!(b.pick(TileRef::new(Column::Left, 7)), PickOutcome::Ignored);
    }

    #[test]
    fn column_names_round_trip() {
        for column in [Column::Left, Column::Right] {
            assert_eq!(Column::parse(column.as_str()), Some(column));
            assert_eq!(column.other().other(), column);
        }
        assert_eq!(Column::parse("middle"), None);
    }
}
