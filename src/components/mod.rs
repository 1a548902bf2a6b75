mod outcome_card;

pub use outcome_card::OutcomeCard;
