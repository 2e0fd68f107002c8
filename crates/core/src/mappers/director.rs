use crate::dto::{CreateDirectorDto, DirectorDto};
use crate::entities::{Director, DirectorRef, NewDirector};
use crate::error::CoreError;
use crate::mappers::required;
use crate::messages;

pub fn director_to_dto(director: &Director) -> DirectorDto {
    DirectorDto {
        id: director.id,
        first_name: Some(director.first_name.clone()),
        second_name: Some(director.second_name.clone()),
    }
}

/// An unpopulated reference only exposes the id.
pub fn director_ref_to_dto(reference: &DirectorRef) -> DirectorDto {
    match reference {
        DirectorRef::Populated(director) => director_to_dto(director),
        DirectorRef::Id(id) => DirectorDto {
            id: *id,
            first_name: None,
            second_name: None,
        },
    }
}

pub fn create_dto_to_new_director(dto: CreateDirectorDto) -> Result<NewDirector, CoreError> {
    Ok(NewDirector {
        first_name: required(dto.first_name, messages::DIRECTOR_FIRST_NAME_REQUIRED)?,
        second_name: required(dto.second_name, messages::DIRECTOR_SECOND_NAME_REQUIRED)?,
        birth_date: required(dto.birth_date, messages::DIRECTOR_BIRTH_DATE_REQUIRED)?,
        bio: required(dto.bio, messages::DIRECTOR_BIO_REQUIRED)?,
    })
}
