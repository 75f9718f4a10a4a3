/// A context for a schema build which holds an arena allocator.
///
/// All linked type nodes of a [Schema](crate::schema::Schema) are allocated in one chunk of
/// memory owned by this context. Nodes reference each other with plain `&'a` references into the
/// arena, which is what allows types to refer to each other in cycles, and the whole graph is
/// dropped at once together with the context.
///
/// Every build allocates an entirely new set of nodes, so a context is typically created once per
/// build and dropped when the resulting schema isn't needed anymore.
pub struct SchemaContext {
    /// An arena allocator that holds the memory allocated for the Schema Context's lifetime
    pub arena: bumpalo::Bump,
}

impl SchemaContext {
    /// Create a new Schema context with an empty arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        SchemaContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    ///
    /// Values put onto the arena are never dropped, so `item` shouldn't own heap memory that
    /// isn't itself allocated in the arena.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Returns the number of bytes currently allocated for nodes in this context.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new()
    }
}
