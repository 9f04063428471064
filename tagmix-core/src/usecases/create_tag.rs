use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub tag_type: TagType,
}

pub fn create_tag<R: TagRepo>(repo: &R, new_tag: NewTag) -> Result<Id> {
    let NewTag { name, tag_type } = new_tag;
    let id = Id::new();
    let tag = Tag {
        id: id.clone(),
        name,
        tag_type,
    };
    log::debug!("Creating tag '{}' ({})", tag.name, tag.tag_type);
    repo.create_tag(tag).map_err(Error::from_tag_repo)?;
    log::info!("Created tag {id}");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;

    fn new_tag(name: &str, tag_type: TagType) -> NewTag {
        NewTag {
            name: name.into(),
            tag_type,
        }
    }

    #[test]
    fn create_and_load_by_name() {
        let db = MockDb::default();
        let id = create_tag(&db, new_tag("tagA", TagType::Artist)).unwrap();
        assert!(id.is_valid());
        let tags = db.load_tags(&[], &["tagA"]).unwrap();
        assert_eq!(
            tags,
            vec![Tag {
                id,
                name: "tagA".into(),
                tag_type: TagType::Artist,
            }]
        );
    }

    #[test]
    fn reject_duplicate_names() {
        let db = MockDb::default();
        assert!(create_tag(&db, new_tag("tagA", TagType::Artist)).is_ok());
        let err = create_tag(&db, new_tag("tagA", TagType::Mood)).unwrap_err();
        assert!(matches!(err, Error::NameExists));
        assert_eq!(db.count_tags().unwrap(), 1);
    }
}
