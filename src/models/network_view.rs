/// One virtual network block.
#[derive(Clone, Debug)]
pub struct NetworkView {
    pub id: String,
    pub cidr_block: String,
}
