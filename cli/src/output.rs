//! Human-readable rendering for command output.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use todo_api::Todo;

/// One list line, e.g. `1 | Buy milk [Not Complete] (id 4)`.
pub fn todo_line(index: usize, todo: &Todo) -> String {
    let status = if todo.complete { "Completed" } else { "Not Complete" };
    format!("{} | {} [{status}] (id {})", index + 1, todo.title, todo.id)
}

pub fn render_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "no todos".to_owned();
    }
    todos
        .iter()
        .enumerate()
        .map(|(index, todo)| todo_line(index, todo))
        .collect::<Vec<_>>()
        .join("\n")
}
