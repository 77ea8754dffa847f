//! Console rendering of battle events.

use std::io::Write;

use crossterm::style::{Attribute, Color, Stylize, style};
use error::GameError;
use hero::PotionOutcome;

use crate::event::{BattleEvent, BattleObserver, StatusLine};

/// Writes one or more narrative lines per [`BattleEvent`]
pub struct ConsoleNarrator<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> ConsoleNarrator<W> {
    /// `colored` turns ANSI styling on; disable it when output is not a terminal
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.colored {
            style(text).with(color).to_string()
        } else {
            text
        }
    }

    fn banner(&self, text: String) -> String {
        if self.colored {
            style(text).attribute(Attribute::Bold).to_string()
        } else {
            text
        }
    }

    fn status_line(&self, tag: &str, status: &StatusLine) -> String {
        let mut line = format!("[{}] {} | HP: {}/{}", tag, status.name, status.hp, status.max_hp);
        if let Some(potions) = status.potions {
            line.push_str(&format!(" | Potions: {}", potions));
        }
        line
    }

    /// Text for an event, one entry per output line
    pub fn render(&self, event: &BattleEvent) -> Vec<String> {
        match event {
            BattleEvent::CampaignStarted { hero, enemies } => vec![
                format!("Your name is now {}. Condolences...", hero),
                format!("Get ready: {} foes stand in your way!", enemies),
            ],
            BattleEvent::EncounterStarted { enemy, index, total } => vec![
                String::new(),
                format!("Encounter {}/{}: a {} blocks your path!", index + 1, total, enemy),
                self.banner("===== THE BATTLE BEGINS =====".to_string()),
            ],
            BattleEvent::Status { player, enemy, .. } => vec![
                "-------------------------------".to_string(),
                self.status_line("Player", player),
                self.status_line("Enemy", enemy),
                "-------------------------------".to_string(),
            ],
            BattleEvent::PlayerAttacked { target, outcome } => {
                let mut lines = vec![self.paint(
                    format!("You hit {} for {} damage!", target, outcome.damage),
                    Color::Green,
                )];
                if outcome.blocked > 0 {
                    lines.push(format!("Another {} damage was blocked!", outcome.blocked));
                }
                lines
            }
            BattleEvent::PlayerDefended => vec!["You raise your guard!".to_string()],
            BattleEvent::PotionDrunk(PotionOutcome::Depleted) => {
                vec!["You reach for a potion, but none are left!".to_string()]
            }
            BattleEvent::PotionDrunk(PotionOutcome::AlreadyFull) => {
                vec!["You are at full health. The potion stays corked!".to_string()]
            }
            BattleEvent::PotionDrunk(PotionOutcome::Healed(amount)) => vec![self.paint(
                format!("You drink a potion and restore {} HP!", amount),
                Color::Cyan,
            )],
            BattleEvent::Summoned { target } => vec![self.paint(
                format!(
                    "Something ancient wakes up. {} tries to flee in terror, but is bitten from behind. What an absurd death...",
                    target
                ),
                Color::Magenta,
            )],
            BattleEvent::EnemyAttacked { attacker, outcome } => {
                let mut lines = vec![format!("{} attacks!", attacker)];
                if outcome.blocked > 0 {
                    lines.push(format!("You block {} damage!", outcome.blocked));
                }
                lines.push(self.paint(format!("You take {} damage!", outcome.damage), Color::Red));
                lines
            }
            BattleEvent::EnemyDefended { enemy } => vec![format!("{} braces for your attack!", enemy)],
            BattleEvent::EnemyHealed { enemy, healed } => {
                vec![format!("{} recovers {} HP!", enemy, healed)]
            }
            BattleEvent::BattleWon { .. } => vec![self.paint("You defeated the enemy!".to_string(), Color::Green)],
            BattleEvent::BattleLost { .. } => vec![self.paint("You fall in battle...".to_string(), Color::Red)],
            BattleEvent::Rested { hero, healed } => vec![
                String::new(),
                format!("{} won the fight!", hero),
                format!("{} makes camp after the hard battle and recovers {} HP!", hero, healed),
            ],
            BattleEvent::CampaignWon { hero, .. } => vec![
                String::new(),
                self.banner(format!(
                    "Congratulations, {}! Every enemy has fallen and the realm is yours!",
                    hero
                )),
            ],
            BattleEvent::CampaignLost { hero, .. } => vec![
                String::new(),
                self.banner(format!("Game over. {} has perished.", hero)),
            ],
        }
    }
}

impl<W: Write> BattleObserver for ConsoleNarrator<W> {
    fn notify(&mut self, event: &BattleEvent) -> Result<(), GameError> {
        for line in self.render(event) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::AttackOutcome;
    use pretty_assertions::assert_eq;

    fn plain() -> ConsoleNarrator<Vec<u8>> {
        ConsoleNarrator::new(Vec::new(), false)
    }

    #[test]
    fn test_status_lines_show_potions_for_player_only() {
        let narrator = plain();
        let lines = narrator.render(&BattleEvent::Status {
            round: 1,
            player: StatusLine {
                name: "Tester".into(),
                hp: 80,
                max_hp: 100,
                potions: Some(2),
            },
            enemy: StatusLine {
                name: "Orc".into(),
                hp: 80,
                max_hp: 80,
                potions: None,
            },
        });
        assert_eq!(lines[1], "[Player] Tester | HP: 80/100 | Potions: 2");
        assert_eq!(lines[2], "[Enemy] Orc | HP: 80/80");
    }

    #[test]
    fn test_blocked_damage_is_reported() {
        let narrator = plain();
        let lines = narrator.render(&BattleEvent::EnemyAttacked {
            attacker: "Orc".into(),
            outcome: AttackOutcome { damage: 3, blocked: 11 },
        });
        assert_eq!(
            lines,
            vec!["Orc attacks!", "You block 11 damage!", "You take 3 damage!"]
        );

        let lines = narrator.render(&BattleEvent::PlayerAttacked {
            target: "Orc".into(),
            outcome: AttackOutcome { damage: 15, blocked: 0 },
        });
        assert_eq!(lines, vec!["You hit Orc for 15 damage!"]);
    }

    #[test]
    fn test_notify_writes_lines() {
        let mut narrator = plain();
        narrator
            .notify(&BattleEvent::PotionDrunk(PotionOutcome::Healed(33)))
            .unwrap();
        narrator.notify(&BattleEvent::PlayerDefended).unwrap();

        let text = String::from_utf8(narrator.into_inner()).unwrap();
        assert_eq!(text, "You drink a potion and restore 33 HP!\nYou raise your guard!\n");
    }

    #[test]
    fn test_colored_output_uses_ansi() {
        let narrator = ConsoleNarrator::new(Vec::new(), true);
        let lines = narrator.render(&BattleEvent::CampaignWon {
            hero: "Tester".into(),
            cleared: 3,
        });
        assert!(lines[1].contains("\u{1b}["));
        assert!(lines[1].contains("Congratulations, Tester!"));
    }
}
