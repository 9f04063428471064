use super::prelude::*;

pub fn load_tags<R: TagRepo>(repo: &R, ids: &[&str], names: &[&str]) -> Result<Vec<Tag>> {
    repo.load_tags(ids, names).map_err(Error::from_tag_repo)
}

pub fn load_tag_types() -> Vec<TagType> {
    TagType::all()
}
