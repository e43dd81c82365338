//! Derived queries used by the views.
//!
//! Both sorts are stable partitions: incomplete entries first, completed
//! entries after, each group keeping its original relative order. Entries
//! carry their original position so links built from them stay correct.

use super::{Todo, TodoList};

/// True iff the list has at least one todo and every todo is completed.
pub fn is_list_complete(list: &TodoList) -> bool {
    !list.todos().is_empty() && list.todos().iter().all(Todo::is_completed)
}

pub fn remaining_count(list: &TodoList) -> usize {
    list.remaining_count()
}

pub fn total_count(list: &TodoList) -> usize {
    list.total_count()
}

/// Incomplete lists first, then complete lists.
pub fn sorted_lists(lists: &[TodoList]) -> Vec<(usize, &TodoList)> {
    stable_partition(lists, is_list_complete)
}

/// Incomplete todos first, then completed todos.
pub fn sorted_todos(todos: &[Todo]) -> Vec<(usize, &Todo)> {
    stable_partition(todos, Todo::is_completed)
}

fn stable_partition<T>(items: &[T], is_done: impl Fn(&T) -> bool) -> Vec<(usize, &T)> {
    let (done, pending): (Vec<_>, Vec<_>) =
        items.iter().enumerate().partition(|(_, item)| is_done(*item));
    pending.into_iter().chain(done).collect()
}
