//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned primary key (identity column).
        id -> Int8,
        /// Human-readable display identifier.
        #[max_length = 50]
        task_id -> Varchar,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        #[max_length = 255]
        description -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion flag.
        completed -> Bool,
    }
}
