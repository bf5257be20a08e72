//! Diesel schema for project and task persistence.

diesel::table! {
    /// Projects owning tasks.
    projects (id) {
        /// Store-assigned project identifier.
        id -> Int8,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records scoped to a project.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Owning project.
        project_id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task status from the configured catalog.
        #[max_length = 50]
        status -> Varchar,
        /// Optional wall-clock deadline.
        deadline -> Nullable<Timestamp>,
        /// Time the task first moved into the completion status.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
