//! Counter screen rendering
//!
//! Three sections mirror the three features: the counter, the fact and the timer.

use crate::state::CounterState;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &CounterState, frame: &mut Frame) {
    let [counter_area, fact_area, timer_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let counter = Paragraph::new(vec![
        Line::from(Span::styled(
            state.count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("[-] Decrement   [+] Increment"),
    ])
    .block(Block::default().title(" Counter ").borders(Borders::ALL));
    frame.render_widget(counter, counter_area);

    let mut fact_button = vec![Span::raw("[f] Get Fact")];
    if state.is_loading {
        fact_button.push(Span::styled(
            "   loading...",
            Style::default().fg(Color::Yellow),
        ));
    }
    let mut fact_lines = vec![Line::from(fact_button)];
    if let Some(fact) = &state.fact {
        fact_lines.push(Line::from(fact.as_str()));
    }
    let fact = Paragraph::new(fact_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Fact ").borders(Borders::ALL));
    frame.render_widget(fact, fact_area);

    let timer_label = if state.is_timer_on {
        "[t] Stop timer"
    } else {
        "[t] Start timer"
    };
    let timer = Paragraph::new(timer_label)
        .block(Block::default().title(" Timer ").borders(Borders::ALL));
    frame.render_widget(timer, timer_area);

    let help = Paragraph::new("q/Esc: quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}
