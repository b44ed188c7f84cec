use crate::round::{ChoiceRound, OptionStatus};

/// Text shown under the round, with its tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Empty,
    Correct,
    TryAgain,
    PairFound,
    AllDone,
    NotAPair,
}

impl Feedback {
    pub fn text(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Correct => "Correct! Great job! 👍",
            Self::TryAgain => "Oops, try again! 😊",
            Self::PairFound => "A Match! 🎉",
            Self::AllDone => "All Done! Amazing! 🌟",
            Self::NotAPair => "Not a match, try again!",
        }
    }

    /// CSS class for the feedback element; empty when neutral.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Correct | Self::PairFound | Self::AllDone => "correct",
            Self::TryAgain | Self::NotAPair => "incorrect",
        }
    }
}

/// Outcome of clicking a button in a choice round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct(usize),
    Incorrect(usize),
    /// The click did not land on an option, or input is locked.
    Ignored,
}

/// Compare the clicked option's encoded value against the round's answer.
///
/// Values are compared as strings so numeric and color answers are handled
/// the same way. Marks the option `Correct` or `Shaking`.
pub fn judge(round: &mut ChoiceRound, value: &str) -> Verdict {
    let Some(index) = round.option_index(value) else {
        return Verdict::Ignored;
    };
    if round.options[index].value == round.answer {
        round.options[index].status = OptionStatus::Correct;
        Verdict::Correct(index)
    } else {
        round.options[index].status = OptionStatus::Shaking;
        Verdict::Incorrect(index)
    }
}
