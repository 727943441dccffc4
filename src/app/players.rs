use crate::domain::ports::Playable;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct FootballPlayer;

impl Playable for FootballPlayer {
    fn message(&self) -> &'static str {
        "Playing football on field"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicPlayer;

impl Playable for MusicPlayer {
    fn message(&self) -> &'static str {
        "Playing music"
    }
}

/// One instance of each variant, football first.
pub fn lineup() -> Vec<Box<dyn Playable>> {
    vec![Box::new(FootballPlayer), Box::new(MusicPlayer)]
}

pub fn play_all(players: &[Box<dyn Playable>], out: &mut dyn Write) -> io::Result<()> {
    for (index, player) in players.iter().enumerate() {
        tracing::debug!("Playing #{}: {}", index + 1, player.message());
        player.play_to(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_variant_messages() {
        assert_eq!(FootballPlayer.message(), "Playing football on field");
        assert_eq!(MusicPlayer.message(), "Playing music");
    }

    struct CountingPlayer {
        writes: Cell<usize>,
    }

    impl Playable for CountingPlayer {
        fn message(&self) -> &'static str {
            "Counting"
        }

        fn play_to(&self, out: &mut dyn Write) -> io::Result<()> {
            self.writes.set(self.writes.get() + 1);
            writeln!(out, "{}", self.message())
        }
    }

    #[test]
    fn test_play_goes_through_play_to() {
        let player = CountingPlayer {
            writes: Cell::new(0),
        };
        let boxed: &dyn Playable = &player;

        boxed.play();
        boxed.play();

        assert_eq!(player.writes.get(), 2);
    }

    #[test]
    fn test_play_to_writes_one_line() {
        let mut buf = Vec::new();
        MusicPlayer.play_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Playing music\n");
    }

    #[test]
    fn test_lineup_order() {
        let messages: Vec<&str> = lineup().iter().map(|p| p.message()).collect();
        assert_eq!(messages, vec!["Playing football on field", "Playing music"]);
    }

    #[test]
    fn test_play_all_output() {
        let mut buf = Vec::new();
        play_all(&lineup(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Playing football on field\nPlaying music\n"
        );
    }

    #[test]
    fn test_play_all_empty() {
        let mut buf = Vec::new();
        play_all(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
