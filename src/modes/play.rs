use anyhow::Result;
use rand::{Rng, rngs::StdRng};
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::info;

use crate::audio::{AudioPlayer, Clip, Track};
use crate::game::{GameEngine, GameState, Phase, TickOutcome, Transition};
use crate::input::InputSource;
use crate::metrics::GameMetrics;
use crate::render::{FrameView, Renderer};

/// The cooperative game loop: poll input, update, render, wait
pub struct PlayMode<V, A, I, R = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    metrics: GameMetrics,
    renderer: V,
    audio: A,
    input: I,
}

impl<V, A, I, R> PlayMode<V, A, I, R>
where
    V: Renderer,
    A: AudioPlayer,
    I: InputSource,
    R: Rng,
{
    pub fn new(mut engine: GameEngine<R>, renderer: V, audio: A, input: I) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            audio,
            input,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn is_stopped(&self) -> bool {
        self.state.phase == Phase::Stopped
    }

    /// Run until the player quits, pacing iterations by the level's tick interval
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;

        let level = self.engine.level().clone();
        sleep(level.start_delay).await;

        let mut ticker = interval(level.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !self.run_iteration()? {
                break;
            }
        }

        info!(
            rounds = self.metrics.rounds_played,
            high_score = self.metrics.high_score,
            "session ended"
        );
        Ok(())
    }

    /// Show the first frame and start the music
    pub fn start(&mut self) -> Result<()> {
        self.audio.play_loop(Track::Background);
        self.metrics.on_round_start();
        self.draw()
    }

    /// One loop iteration. Returns false once the player has quit.
    pub fn run_iteration(&mut self) -> Result<bool> {
        for event in self.input.poll()? {
            let transition = self.engine.handle_input(&mut self.state, event);
            self.on_transition(transition);
            if self.is_stopped() {
                return Ok(false);
            }
        }

        let outcome = self.engine.tick(&mut self.state);
        self.on_tick(outcome);

        if self.state.is_running() {
            self.metrics.update();
        }
        self.draw()?;

        Ok(true)
    }

    fn on_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Paused => {
                self.metrics.on_pause();
                self.audio.pause();
            }
            Transition::Resumed => {
                self.metrics.on_resume();
                self.audio.resume();
            }
            Transition::Restarted => {
                self.metrics.on_round_start();
                self.audio.resume();
            }
            Transition::Quit => info!(score = self.state.score(), "quit requested"),
            Transition::None | Transition::Turned => {}
        }
    }

    fn on_tick(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Ate => self.audio.play_one_shot(Clip::Ding),
            TickOutcome::GameOver { ate, .. } => {
                if ate {
                    self.audio.play_one_shot(Clip::Ding);
                }
                self.audio.play_one_shot(Clip::Crash);
                self.audio.pause();
                self.metrics.on_game_over(self.state.score());
            }
            TickOutcome::Idle | TickOutcome::Continue => {}
        }
    }

    fn draw(&mut self) -> Result<()> {
        let view = FrameView::capture(&self.state, &self.metrics);
        self.renderer.draw_frame(&view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        Apple, CollisionCause, Direction, GameConfig, InputEvent, Level, Position, Snake,
    };
    use crate::input::ScriptedInput;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: usize,
        last_score: Option<String>,
        last_paused: bool,
    }

    impl Renderer for RecordingRenderer {
        fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<()> {
            self.frames += 1;
            self.last_score = Some(view.score_text());
            self.last_paused = view.is_paused();
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Sound {
        OneShot(Clip),
        Loop(Track),
        Pause,
        Resume,
    }

    #[derive(Default)]
    struct RecordingAudio {
        calls: Vec<Sound>,
    }

    impl AudioPlayer for RecordingAudio {
        fn play_one_shot(&mut self, clip: Clip) {
            self.calls.push(Sound::OneShot(clip));
        }

        fn play_loop(&mut self, track: Track) {
            self.calls.push(Sound::Loop(track));
        }

        fn pause(&mut self) {
            self.calls.push(Sound::Pause);
        }

        fn resume(&mut self) {
            self.calls.push(Sound::Resume);
        }
    }

    type TestMode = PlayMode<RecordingRenderer, RecordingAudio, ScriptedInput>;

    fn play_mode(level: Level, script: Vec<Vec<InputEvent>>) -> TestMode {
        let engine = GameEngine::new(
            GameConfig::default(),
            level.config(),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        PlayMode::new(
            engine,
            RecordingRenderer::default(),
            RecordingAudio::default(),
            ScriptedInput::new(script),
        )
    }

    #[test]
    fn test_start_plays_music_and_draws() {
        let mut mode = play_mode(Level::One, vec![]);
        mode.start().unwrap();

        assert_eq!(mode.audio.calls, vec![Sound::Loop(Track::Background)]);
        assert_eq!(mode.renderer().frames, 1);
        assert_eq!(mode.renderer().last_score.as_deref(), Some("Score: 0"));
    }

    #[test]
    fn test_one_tick_per_iteration() {
        let mut mode = play_mode(Level::One, vec![]);

        assert!(mode.run_iteration().unwrap());
        assert!(mode.run_iteration().unwrap());

        assert_eq!(mode.state().steps, 2);
        assert_eq!(mode.state().snake.head(), Position::new(40, 120));
        assert_eq!(mode.renderer().frames, 2);
    }

    #[test]
    fn test_eating_plays_ding() {
        let mut mode = play_mode(Level::One, vec![]);
        mode.state.apple = Apple::new(Position::new(40, 80));

        mode.run_iteration().unwrap();

        assert_eq!(mode.audio.calls, vec![Sound::OneShot(Clip::Ding)]);
        assert_eq!(mode.renderer().last_score.as_deref(), Some("Score: 1"));
    }

    #[test]
    fn test_crash_ends_round_and_restart_resumes() {
        let mut mode = play_mode(
            Level::One,
            vec![
                vec![InputEvent::Turn(Direction::Left)],
                vec![InputEvent::Turn(Direction::Down)],
                vec![InputEvent::Restart],
            ],
        );
        mode.state.snake = Snake::new(Position::new(0, 400), Direction::Up, 1);

        mode.run_iteration().unwrap();
        assert_eq!(
            mode.state().phase,
            Phase::GameOver(CollisionCause::Wall)
        );
        assert_eq!(
            mode.audio.calls,
            vec![Sound::OneShot(Clip::Crash), Sound::Pause]
        );
        assert_eq!(mode.metrics().rounds_played, 1);

        // Steering is ignored while the round is over
        mode.run_iteration().unwrap();
        assert!(mode.state().is_game_over());

        mode.run_iteration().unwrap();
        assert!(mode.state().is_running());
        assert_eq!(mode.state().snake.len(), 1);
        assert_eq!(mode.state().snake.head(), Position::new(40, 80));
        assert_eq!(mode.audio.calls.last(), Some(&Sound::Resume));
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut mode = play_mode(
            Level::One,
            vec![vec![InputEvent::Pause], vec![], vec![InputEvent::Pause]],
        );

        mode.run_iteration().unwrap();
        let frozen = mode.state().snake.clone();
        assert!(mode.renderer().last_paused);
        mode.run_iteration().unwrap();
        assert_eq!(mode.state().snake, frozen);
        assert_eq!(mode.state().steps, 0);

        mode.run_iteration().unwrap();
        assert_eq!(mode.state().steps, 1);
        assert_eq!(mode.audio.calls, vec![Sound::Pause, Sound::Resume]);
    }

    #[test]
    fn test_eating_while_crashing_plays_both_clips() {
        let mut mode = play_mode(Level::One, vec![]);
        mode.state.snake = Snake::from_body(
            vec![Position::new(40, 800), Position::new(40, 760)],
            Direction::Down,
        );
        mode.state.apple = Apple::new(Position::new(40, 800));

        mode.run_iteration().unwrap();

        assert!(mode.state().is_game_over());
        assert_eq!(
            mode.audio.calls,
            vec![
                Sound::OneShot(Clip::Ding),
                Sound::OneShot(Clip::Crash),
                Sound::Pause
            ]
        );
        assert_eq!(mode.metrics().high_score, 2);
    }

    #[test]
    fn test_turns_queued_in_one_iteration_cannot_reverse() {
        let mut mode = play_mode(
            Level::One,
            vec![vec![
                InputEvent::Turn(Direction::Left),
                InputEvent::Turn(Direction::Up),
            ]],
        );
        mode.state.snake = Snake::from_body(
            vec![
                Position::new(400, 400),
                Position::new(400, 360),
                Position::new(400, 320),
            ],
            Direction::Down,
        );

        mode.run_iteration().unwrap();

        assert!(mode.state().is_running());
        assert_eq!(mode.state().snake.direction, Direction::Left);
        assert_eq!(mode.state().snake.head(), Position::new(360, 400));
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut mode = play_mode(Level::Two, vec![vec![InputEvent::Quit]]);

        assert!(!mode.run_iteration().unwrap());
        assert!(mode.is_stopped());
        assert_eq!(mode.state().steps, 0);
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut mode = play_mode(
            Level::Two,
            vec![vec![], vec![InputEvent::Turn(Direction::Right)], vec![InputEvent::Quit]],
        );

        mode.run().await.unwrap();

        assert!(mode.is_stopped());
        assert_eq!(mode.state().steps, 2);
        assert_eq!(mode.state().snake.head(), Position::new(80, 80));
    }
}
