//! TUI 単一選択ダイアログ

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::io::{self, stdout};

/// 単一選択の結果
#[derive(Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(usize),
    Cancelled,
}

/// 入力キーに対する選択状態の遷移
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Move(usize),
    Done(SelectOutcome),
    Ignore,
}

fn handle_key(code: KeyCode, current: usize, len: usize) -> KeyAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Done(SelectOutcome::Cancelled),
        KeyCode::Enter if len > 0 => KeyAction::Done(SelectOutcome::Selected(current)),
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(current.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => {
            KeyAction::Move((current + 1).min(len.saturating_sub(1)))
        }
        KeyCode::Home => KeyAction::Move(0),
        KeyCode::End => KeyAction::Move(len.saturating_sub(1)),
        _ => KeyAction::Ignore,
    }
}

/// 単一選択ダイアログを表示
pub fn single_select(title: &str, options: &[String]) -> io::Result<SelectOutcome> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = run_select(title, options);

    // ターミナルを復元（選択に失敗しても必ず戻す）
    let restored = terminal::disable_raw_mode().and_then(|_| {
        stdout().execute(LeaveAlternateScreen)?;
        Ok(())
    });

    let outcome = result?;
    restored?;
    Ok(outcome)
}

fn run_select(title: &str, options: &[String]) -> io::Result<SelectOutcome> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([Constraint::Min(3), Constraint::Length(2)])
                .split(f.area());

            let list_items: Vec<ListItem> = options
                .iter()
                .map(|option| ListItem::new(option.as_str()))
                .collect();

            let list = List::new(list_items)
                .block(Block::default().title(title).borders(Borders::ALL))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");

            f.render_stateful_widget(list, chunks[0], &mut state);

            let help = Paragraph::new("↑/↓: move  enter: select  q/esc: cancel")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(help, chunks[1]);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let current = state.selected().unwrap_or(0);
            match handle_key(key.code, current, options.len()) {
                KeyAction::Move(i) => state.select(Some(i)),
                KeyAction::Done(outcome) => return Ok(outcome),
                KeyAction::Ignore => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_selects_current() {
        assert_eq!(
            handle_key(KeyCode::Enter, 2, 3),
            KeyAction::Done(SelectOutcome::Selected(2))
        );
    }

    #[test]
    fn enter_on_empty_list_is_ignored() {
        assert_eq!(handle_key(KeyCode::Enter, 0, 0), KeyAction::Ignore);
    }

    #[test]
    fn escape_and_q_cancel() {
        assert_eq!(
            handle_key(KeyCode::Esc, 0, 3),
            KeyAction::Done(SelectOutcome::Cancelled)
        );
        assert_eq!(
            handle_key(KeyCode::Char('q'), 1, 3),
            KeyAction::Done(SelectOutcome::Cancelled)
        );
    }

    #[test]
    fn movement_is_clamped() {
        assert_eq!(handle_key(KeyCode::Up, 0, 3), KeyAction::Move(0));
        assert_eq!(handle_key(KeyCode::Down, 2, 3), KeyAction::Move(2));
        assert_eq!(handle_key(KeyCode::Char('j'), 0, 3), KeyAction::Move(1));
        assert_eq!(handle_key(KeyCode::End, 0, 3), KeyAction::Move(2));
    }
}
