//! The scripted teacher-student dialogue.

use serde::Serialize;

/// Who is speaking in a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Speaker {
    Teacher,
    Student,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Teacher => "Teacher",
            Speaker::Student => "Student",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the scripted lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

const fn teacher(text: &'static str) -> DialogueLine {
    DialogueLine {
        speaker: Speaker::Teacher,
        text,
    }
}

const fn student(text: &'static str) -> DialogueLine {
    DialogueLine {
        speaker: Speaker::Student,
        text,
    }
}

const LESSON: &[DialogueLine] = &[
    teacher("Welcome to today's lesson on Microeconomics! We'll be covering the fundamentals of demand and supply. Are you ready to begin?"),
    student("Yes, I'm ready! Can you explain what demand means in economics?"),
    teacher("Great question! Demand refers to the quantity of a good or service that consumers are willing and able to purchase at various prices during a given time period. The key words here are 'willing' and 'able' - both conditions must be met."),
    student("So if I want to buy something but can't afford it, that's not demand?"),
    teacher("Exactly! That would just be a desire, not economic demand. Now, there's an important principle called the Law of Demand. It states that as price increases, quantity demanded decreases, and vice versa, assuming all other factors remain constant."),
    student("That makes sense - when things get more expensive, people buy less. What about supply?"),
    teacher("Supply is the opposite side of the market. It's the quantity of a good that producers are willing and able to offer for sale at various prices. The Law of Supply states that as price increases, quantity supplied increases."),
    student("So sellers want to sell more when prices are higher because they can make more profit?"),
    teacher("Precisely! Higher prices incentivize producers to supply more. Now, when we bring demand and supply together, we get market equilibrium - the point where quantity demanded equals quantity supplied."),
    student("What happens if the market isn't at equilibrium?"),
    teacher("Excellent question! If price is above equilibrium, we get excess supply (surplus). If price is below equilibrium, we get excess demand (shortage). Market forces will push the price toward equilibrium."),
    student("This is really helpful! Can we talk about elasticity next time?"),
    teacher("Absolutely! Elasticity is crucial for understanding how responsive consumers and producers are to price changes. Keep studying, and you'll do great on your exam!"),
];

/// The full lesson, identical on every call.
pub fn dialogue() -> &'static [DialogueLine] {
    LESSON
}
