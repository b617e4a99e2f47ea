#[cfg(test)]
mod tests {
    use kanbo::libs::editor::{Editor, EditorEvent, EditorState, Transition, TransitionError};
    use kanbo::libs::task::TaskDraft;

    #[test]
    fn test_starts_closed() {
        let editor = Editor::new();
        assert_eq!(editor.state(), EditorState::Closed);
    }

    #[test]
    fn test_save_requires_open_session() {
        let mut editor = Editor::new();
        assert_eq!(editor.transition(EditorEvent::Save), Err(TransitionError::NotOpen));
        assert_eq!(editor.transition(EditorEvent::Delete), Err(TransitionError::NotOpen));
        assert_eq!(editor.transition(EditorEvent::Cancel), Err(TransitionError::NotOpen));
    }

    #[test]
    fn test_create_flow() {
        let mut editor = Editor::new();
        assert_eq!(editor.transition(EditorEvent::OpenCreate), Ok(Transition::Opened));
        assert_eq!(editor.state(), EditorState::Creating);

        editor.draft_mut().title = "T".to_string();
        editor.draft_mut().status = "todo".to_string();
        editor.draft_mut().board = "X".to_string();

        let result = editor.transition(EditorEvent::Save).unwrap();
        assert_eq!(result, Transition::Create(TaskDraft::new("T", "", "todo", "X")));
        assert_eq!(editor.state(), EditorState::Closed);
    }

    #[test]
    fn test_edit_flow_prefills_draft() {
        let mut editor = Editor::new();
        let prefill = TaskDraft::new("T", "desc", "doing", "X");
        editor
            .transition(EditorEvent::OpenEdit {
                id: 7,
                prefill: Some(prefill.clone()),
            })
            .unwrap();

        assert_eq!(editor.state(), EditorState::Editing(7));
        assert_eq!(editor.draft(), &prefill);

        let result = editor.transition(EditorEvent::Save).unwrap();
        assert_eq!(result, Transition::Overwrite(7, prefill));
    }

    #[test]
    fn test_edit_missing_task_leaves_fields_blank() {
        let mut editor = Editor::new();
        editor.transition(EditorEvent::OpenEdit { id: 42, prefill: None }).unwrap();

        assert_eq!(editor.state(), EditorState::Editing(42));
        assert_eq!(editor.draft(), &TaskDraft::default());
    }

    #[test]
    fn test_delete_only_from_edit_session() {
        let mut editor = Editor::new();
        editor
            .transition(EditorEvent::OpenEdit {
                id: 3,
                prefill: Some(TaskDraft::new("T", "", "todo", "X")),
            })
            .unwrap();
        assert_eq!(editor.transition(EditorEvent::Delete), Ok(Transition::Remove(3)));
        assert_eq!(editor.state(), EditorState::Closed);

        editor.transition(EditorEvent::OpenCreate).unwrap();
        assert_eq!(editor.transition(EditorEvent::Delete), Err(TransitionError::NoDeleteTarget));
    }

    #[test]
    fn test_last_open_wins() {
        let mut editor = Editor::new();
        editor.transition(EditorEvent::OpenCreate).unwrap();
        editor.draft_mut().title = "pending".to_string();

        // A second open replaces the pending session wholesale.
        let prefill = TaskDraft::new("T", "", "done", "X");
        editor
            .transition(EditorEvent::OpenEdit {
                id: 9,
                prefill: Some(prefill.clone()),
            })
            .unwrap();
        assert_eq!(editor.state(), EditorState::Editing(9));
        assert_eq!(editor.draft(), &prefill);

        editor.transition(EditorEvent::OpenCreate).unwrap();
        assert_eq!(editor.state(), EditorState::Creating);
        assert_eq!(editor.draft(), &TaskDraft::default());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = Editor::new();
        editor.transition(EditorEvent::OpenCreate).unwrap();
        editor.draft_mut().title = "discard me".to_string();

        assert_eq!(editor.transition(EditorEvent::Cancel), Ok(Transition::Discarded));
        assert_eq!(editor.state(), EditorState::Closed);
        assert_eq!(editor.draft(), &TaskDraft::default());
    }
}
