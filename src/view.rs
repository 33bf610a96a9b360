use std::{
    io::{stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{Frame, SimHandle};

pub use render::render_frame;
pub mod render;

/// The terminal view: polls the simulation for frames and redraws the board
/// until the run ends or the user quits.
pub struct View {
    thread: JoinHandle<()>,
}

impl View {
    pub fn spawn(handle: SimHandle, max_generations: u64) -> Self {
        let thread = thread::spawn(move || view_loop(handle, max_generations));
        Self { thread }
    }

    pub fn join(self) {
        self.thread.join().unwrap();
    }
}

pub enum InputCmd {
    Exit,
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let command = match key {
            Ok(Key::Char('q')) | Ok(Key::Ctrl('c')) | Ok(Key::Esc) => InputCmd::Exit,
            Ok(_) => continue,
            Err(_) => break,
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

fn view_loop(handle: SimHandle, max_generations: u64) {
    // Raw mode is held here rather than in the input thread so the terminal
    // is restored when the view winds down.
    let raw = stdout().into_raw_mode().unwrap();
    let (sender, receiver) = mpsc::channel();
    thread::spawn(|| input_loop(sender));

    loop {
        if matches!(receiver.try_recv(), Ok(InputCmd::Exit)) {
            break;
        }

        let frame = handle.snapshot();
        display_frame(&frame);
        if frame.converged || frame.generation >= max_generations {
            break;
        }

        thread::sleep(VIEW_REFRESH_INTERVAL);
    }

    drop(raw);
}

fn display_frame(frame: &Frame) {
    let clear = termion::clear::All;
    let mut result = format!("{clear}");
    for (index, line) in render_frame(frame).iter().enumerate() {
        let goto = termion::cursor::Goto(1, index as u16 + 1);
        result += &format!("{goto}{line}");
    }
    print!("{result}");
    stdout().flush().unwrap();
}
