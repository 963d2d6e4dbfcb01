//! Scroll frame demo: a column of 30 buttons in a small viewport.
//!
//! Keys: arrows/`j`/`k` scroll, `o` flips the scroll axis, `q` quits.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program, WindowSizeMsg};
use bubbletea_scrollframe::{Orientation, ScrollableFrame};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss::{Color, Style};

const BUTTON_COUNT: usize = 30;

struct App {
    frame: ScrollableFrame,
}

fn button_view(label: &str) -> String {
    Style::new()
        .background(Color::from("#5f5fd7"))
        .foreground(Color::from("#ffffff"))
        .render(&format!("  {}  ", label))
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut frame = ScrollableFrame::new(36, 12)
            .with_scrollbar(true)
            .with_style(Style::new().border_style(lipgloss_extras::lipgloss::normal_border()))
            .with_gap(1);

        let mut cmd = None;
        for i in 1..=BUTTON_COUNT {
            cmd = frame.push_child(button_view(&format!("button {}", i)));
        }

        (Self { frame }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match key_msg.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Char('o') => {
                    let flipped = match self.frame.orientation() {
                        Orientation::Vertical => Orientation::Horizontal,
                        Orientation::Horizontal => Orientation::Vertical,
                    };
                    self.frame.set_orientation(flipped);
                    return None;
                }
                _ => {}
            }
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            let width = (size.width as usize).min(60).max(20);
            let height = (size.height as usize).saturating_sub(4).max(6);
            return self.frame.set_size(width, height);
        }

        self.frame.update(&msg)
    }

    fn view(&self) -> String {
        let title = Style::new().bold(true).render("scroll frame demo");
        let status = format!(
            "axis: {:?}  offset: {}/{:?}",
            self.frame.orientation(),
            self.frame.offset(),
            self.frame.scroll_region(),
        );
        let help = "↑/↓ scroll · f/b page · o flip axis · q quit";
        format!("{}\n{}\n{}\n{}", title, self.frame.view(), status, help)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
